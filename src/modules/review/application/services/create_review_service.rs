use async_trait::async_trait;

use crate::review::application::{
    domain::entities::Review,
    ports::{
        incoming::use_cases::{CreateReviewCommand, CreateReviewError, CreateReviewUseCase},
        outgoing::ReviewRepository,
    },
};

#[derive(Debug, Clone)]
pub struct CreateReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateReviewUseCase for CreateReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, command: CreateReviewCommand) -> Result<Review, CreateReviewError> {
        let review = Review::new(
            command.author(),
            command.media().clone(),
            command.content().to_string(),
        );

        self.repository
            .create_review(review)
            .await
            .map_err(|e| CreateReviewError::RepositoryError(e.to_string()))
    }
}
