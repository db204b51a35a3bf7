use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    review::application::{
        domain::entities::Review,
        ports::{
            incoming::use_cases::{GetReviewsError, GetReviewsUseCase},
            outgoing::ReviewQuery,
        },
    },
};

#[derive(Debug, Clone)]
pub struct GetReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReviewsUseCase for GetReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Review>, GetReviewsError> {
        self.query
            .get_reviews(owner)
            .await
            .map_err(|e| GetReviewsError::QueryError(e.to_string()))
    }
}
