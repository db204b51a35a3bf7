use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveFavoriteError {
    #[error("Favorite not found")]
    FavoriteNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, favorite_id: Uuid) -> Result<(), RemoveFavoriteError>;
}
