use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    token_provider::ACCESS_TOKEN_TYPE, HashError, PasswordHasher, TokenClaims, TokenError,
    TokenProvider,
};
use crate::shared::domain::{MediaRef, MediaType};

/// Deterministic hasher: `hashed:<password>`.
#[derive(Debug, Clone, Default)]
pub struct FakePasswordHasher {
    fail: bool,
}

impl FakePasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }

    pub fn hash_of(password: &str) -> String {
        format!("hashed:{}", password)
    }
}

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        if self.fail {
            return Err(HashError::HashFailed("forced failure".to_string()));
        }
        Ok(Self::hash_of(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.fail {
            return Err(HashError::TaskFailed);
        }
        Ok(Self::hash_of(password) == hash)
    }
}

/// Tokens are `token:<uuid>`; anything else fails verification.
#[derive(Debug, Clone, Default)]
pub struct FakeTokenProvider;

impl FakeTokenProvider {
    pub fn token_for(user_id: Uuid) -> String {
        format!("token:{}", user_id)
    }
}

impl TokenProvider for FakeTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(Self::token_for(user_id))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let sub = token
            .strip_prefix("token:")
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .ok_or(TokenError::MalformedToken)?;

        Ok(TokenClaims {
            sub,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            iss: "cinetrack".to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        })
    }
}

pub fn sample_media(media_id: &str) -> MediaRef {
    MediaRef {
        media_type: MediaType::Movie,
        media_id: media_id.to_string(),
        media_title: "Cidade de Deus".to_string(),
        media_poster: "/cidade-de-deus.jpg".to_string(),
    }
}
