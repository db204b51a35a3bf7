use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::favorite::application::domain::entities::Favorite;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FavoriteRepositoryError {
    #[error("Favorite not found")]
    FavoriteNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn create_favorite(&self, favorite: Favorite) -> Result<Favorite, FavoriteRepositoryError>;

    /// Deletes only when `favorite_id` belongs to `owner`.
    async fn delete_favorite(
        &self,
        owner: UserId,
        favorite_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError>;
}
