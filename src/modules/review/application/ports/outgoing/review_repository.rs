use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::review::application::domain::entities::Review;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Review not found")]
    ReviewNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create_review(&self, review: Review) -> Result<Review, ReviewRepositoryError>;

    async fn delete_review(&self, owner: UserId, review_id: Uuid)
        -> Result<(), ReviewRepositoryError>;
}
