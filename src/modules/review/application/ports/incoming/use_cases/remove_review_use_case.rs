use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveReviewError {
    #[error("Review not found")]
    ReviewNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveReviewUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, review_id: Uuid) -> Result<(), RemoveReviewError>;
}
