use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::AuthSession,
    ports::outgoing::{PasswordHasher, TokenProvider, UserQuery},
};

#[derive(Debug, Clone)]
pub struct SigninCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SigninError {
    #[error("User does not exist")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ISigninUserUseCase: Send + Sync {
    async fn execute(&self, command: SigninCommand) -> Result<AuthSession, SigninError>;
}

pub struct SigninUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> SigninUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ISigninUserUseCase for SigninUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: SigninCommand) -> Result<AuthSession, SigninError> {
        let user = self
            .query
            .find_by_username(&command.username)
            .await
            .map_err(|e| SigninError::QueryError(e.to_string()))?
            .ok_or(SigninError::UserNotFound)?;

        let valid = self
            .password_hasher
            .verify_password(&command.password, &user.password_hash)
            .await
            .map_err(|e| SigninError::PasswordVerificationFailed(e.to_string()))?;

        if !valid {
            return Err(SigninError::WrongPassword);
        }

        let token = self
            .token_provider
            .generate_access_token(user.id().value())
            .map_err(|e| SigninError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            token,
            user: user.info(),
        })
    }
}
