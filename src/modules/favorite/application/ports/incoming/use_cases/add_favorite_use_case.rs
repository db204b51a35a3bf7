use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    favorite::application::domain::entities::Favorite,
    shared::domain::{MediaRef, MediaType},
};

//
// ──────────────────────────────────────────────────────────
// Add Favorite Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AddFavoriteCommand {
    owner: UserId,
    media: MediaRef,
    media_rate: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddFavoriteCommandError {
    #[error("Unknown media type: {0}")]
    InvalidMediaType(String),

    #[error("Media rate must be a finite number")]
    InvalidMediaRate,
}

impl AddFavoriteCommand {
    pub fn new(
        owner: UserId,
        media_type: &str,
        media_id: String,
        media_title: String,
        media_poster: String,
        media_rate: Option<f64>,
    ) -> Result<Self, AddFavoriteCommandError> {
        let media_type = media_type
            .parse::<MediaType>()
            .map_err(|_| AddFavoriteCommandError::InvalidMediaType(media_type.to_string()))?;

        let media_rate = media_rate
            .filter(|rate| rate.is_finite())
            .ok_or(AddFavoriteCommandError::InvalidMediaRate)?;

        Ok(Self {
            owner,
            media: MediaRef {
                media_type,
                media_id,
                media_title,
                media_poster,
            },
            media_rate,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn media(&self) -> &MediaRef {
        &self.media
    }

    pub fn media_rate(&self) -> f64 {
        self.media_rate
    }
}

//
// ──────────────────────────────────────────────────────────
// Outcome / Error
// ──────────────────────────────────────────────────────────
//

/// Adding a media item twice hands back the stored favorite.
#[derive(Debug, Clone, PartialEq)]
pub enum AddFavoriteOutcome {
    Created(Favorite),
    AlreadyExists(Favorite),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddFavoriteError {
    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AddFavoriteCommand,
    ) -> Result<AddFavoriteOutcome, AddFavoriteError>;
}
