use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    review::application::ports::{
        incoming::use_cases::{RemoveReviewError, RemoveReviewUseCase},
        outgoing::{ReviewRepository, ReviewRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct RemoveReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    repository: R,
}

impl<R> RemoveReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveReviewUseCase for RemoveReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, review_id: Uuid) -> Result<(), RemoveReviewError> {
        self.repository
            .delete_review(owner, review_id)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::ReviewNotFound => RemoveReviewError::ReviewNotFound,
                other => RemoveReviewError::RepositoryError(other.to_string()),
            })
    }
}
