use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserInfo},
    ports::outgoing::{PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdatePasswordCommand {
    pub user_id: UserId,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePasswordError {
    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdatePasswordUseCase: Send + Sync {
    async fn execute(&self, command: UpdatePasswordCommand)
        -> Result<UserInfo, UpdatePasswordError>;
}

pub struct UpdatePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> UpdatePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IUpdatePasswordUseCase for UpdatePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdatePasswordCommand,
    ) -> Result<UserInfo, UpdatePasswordError> {
        let mut user = self
            .query
            .find_by_id(command.user_id)
            .await
            .map_err(|e| UpdatePasswordError::QueryError(e.to_string()))?
            .ok_or(UpdatePasswordError::UserNotFound)?;

        let valid = self
            .password_hasher
            .verify_password(&command.current_password, &user.password_hash)
            .await
            .map_err(|e| UpdatePasswordError::HashingFailed(e.to_string()))?;

        if !valid {
            return Err(UpdatePasswordError::WrongPassword);
        }

        let new_hash = self
            .password_hasher
            .hash_password(&command.new_password)
            .await
            .map_err(|e| UpdatePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(command.user_id, new_hash.clone())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdatePasswordError::UserNotFound,
                other => UpdatePasswordError::RepositoryError(other.to_string()),
            })?;

        user.password_hash = new_hash;
        user.meta.touch();

        Ok(user.info())
    }
}
