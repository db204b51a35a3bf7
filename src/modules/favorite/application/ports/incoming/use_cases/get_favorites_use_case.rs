use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    favorite::application::domain::entities::Favorite,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFavoritesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetFavoritesUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Favorite>, GetFavoritesError>;
}
