use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::sea_orm_entity::{
    ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as ReviewEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::review::application::{
    domain::entities::Review,
    ports::outgoing::{ReviewRepository, ReviewRepositoryError},
};

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn create_review(&self, review: Review) -> Result<Review, ReviewRepositoryError> {
        let active = ReviewActiveModel {
            id: Set(review.meta.id),
            user_id: Set(review.user.value()),
            content: Set(review.content),
            media_type: Set(review.media.media_type.as_str().to_string()),
            media_id: Set(review.media.media_id),
            media_title: Set(review.media.media_title),
            media_poster: Set(review.media.media_poster),
            created_at: Set(review.meta.created_at.into()),
            updated_at: Set(review.meta.updated_at.into()),
        };

        active
            .insert(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?
            .to_review()
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))
    }

    async fn delete_review(
        &self,
        owner: UserId,
        review_id: Uuid,
    ) -> Result<(), ReviewRepositoryError> {
        let result = ReviewEntity::delete_many()
            .filter(ReviewColumn::Id.eq(review_id))
            .filter(ReviewColumn::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::ReviewNotFound);
        }

        Ok(())
    }
}
