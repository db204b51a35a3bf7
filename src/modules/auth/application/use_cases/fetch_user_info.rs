use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserInfo},
    ports::outgoing::UserQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserInfoError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchUserInfoUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserInfo, FetchUserInfoError>;
}

#[derive(Debug, Clone)]
pub struct FetchUserInfoUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchUserInfoUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchUserInfoUseCase for FetchUserInfoUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserInfo, FetchUserInfoError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserInfoError::QueryError(e.to_string()))?
            .map(|user| user.info())
            .ok_or(FetchUserInfoError::UserNotFound)
    }
}
