use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Hashing task failed to complete")]
    TaskFailed,
}

/// Hashing runs off the async executor; implementations decide how.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password, `Err` only when the check itself failed.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
