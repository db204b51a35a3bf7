use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::sea_orm_entity::{Column as ReviewColumn, Entity as ReviewEntity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::review::application::{
    domain::entities::Review,
    ports::outgoing::{ReviewQuery, ReviewQueryError},
};

#[derive(Clone, Debug)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_review(model: Model) -> Result<Review, ReviewQueryError> {
    model
        .to_review()
        .map_err(|e| ReviewQueryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn get_reviews(&self, owner: UserId) -> Result<Vec<Review>, ReviewQueryError> {
        ReviewEntity::find()
            .filter(ReviewColumn::UserId.eq(owner.value()))
            .order_by_desc(ReviewColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ReviewQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(to_review)
            .collect()
    }
}
