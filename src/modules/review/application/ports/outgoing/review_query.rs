use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::review::application::domain::entities::Review;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Reviews written by `owner`, newest first.
    async fn get_reviews(&self, owner: UserId) -> Result<Vec<Review>, ReviewQueryError>;
}
