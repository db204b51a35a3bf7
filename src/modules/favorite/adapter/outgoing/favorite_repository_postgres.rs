use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::sea_orm_entity::{
    ActiveModel as FavoriteActiveModel, Column as FavoriteColumn, Entity as FavoriteEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::favorite::application::{
    domain::entities::Favorite,
    ports::outgoing::{FavoriteRepository, FavoriteRepositoryError},
};

#[derive(Clone, Debug)]
pub struct FavoriteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn create_favorite(
        &self,
        favorite: Favorite,
    ) -> Result<Favorite, FavoriteRepositoryError> {
        let active = FavoriteActiveModel {
            id: Set(favorite.meta.id),
            user_id: Set(favorite.user.value()),
            media_type: Set(favorite.media.media_type.as_str().to_string()),
            media_id: Set(favorite.media.media_id),
            media_title: Set(favorite.media.media_title),
            media_poster: Set(favorite.media.media_poster),
            media_rate: Set(favorite.media_rate),
            created_at: Set(favorite.meta.created_at.into()),
            updated_at: Set(favorite.meta.updated_at.into()),
        };

        active
            .insert(&*self.db)
            .await
            .map_err(|e| FavoriteRepositoryError::DatabaseError(e.to_string()))?
            .to_favorite()
            .map_err(|e| FavoriteRepositoryError::DatabaseError(e.to_string()))
    }

    async fn delete_favorite(
        &self,
        owner: UserId,
        favorite_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError> {
        let result = FavoriteEntity::delete_many()
            .filter(FavoriteColumn::Id.eq(favorite_id))
            .filter(FavoriteColumn::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| FavoriteRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(FavoriteRepositoryError::FavoriteNotFound);
        }

        Ok(())
    }
}
