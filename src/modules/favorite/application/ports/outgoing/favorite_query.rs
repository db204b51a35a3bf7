use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::favorite::application::domain::entities::Favorite;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FavoriteQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FavoriteQuery: Send + Sync {
    /// Owner's favorites, newest first.
    async fn get_favorites(&self, owner: UserId) -> Result<Vec<Favorite>, FavoriteQueryError>;

    async fn find_by_media(
        &self,
        owner: UserId,
        media_id: &str,
    ) -> Result<Option<Favorite>, FavoriteQueryError>;
}
