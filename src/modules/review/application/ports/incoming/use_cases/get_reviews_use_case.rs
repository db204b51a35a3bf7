use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, review::application::domain::entities::Review,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetReviewsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetReviewsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Review>, GetReviewsError>;
}
