use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{AuthSession, User},
    ports::outgoing::{PasswordHasher, TokenProvider, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub username: String,
    pub display_name: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignupError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISignupUserUseCase: Send + Sync {
    async fn execute(&self, command: SignupCommand) -> Result<AuthSession, SignupError>;
}

/// Creates the account and signs the new user in.
///
/// Username availability is checked by the request's validation chain; the
/// unique index still decides races, surfacing as [`SignupError::UsernameTaken`].
pub struct SignupUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> SignupUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ISignupUserUseCase for SignupUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: SignupCommand) -> Result<AuthSession, SignupError> {
        let password_hash = self
            .password_hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| SignupError::HashingFailed(e.to_string()))?;

        let user = User::new(command.username, command.display_name, password_hash);

        let created = self
            .repository
            .create_user(user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => SignupError::UsernameTaken,
                other => SignupError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .generate_access_token(created.id().value())
            .map_err(|e| SignupError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            token,
            user: created.info(),
        })
    }
}
