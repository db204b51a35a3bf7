use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    review::application::domain::entities::{Review, CONTENT_MIN_CHARS},
    shared::domain::{MediaRef, MediaType},
};

//
// ──────────────────────────────────────────────────────────
// Create Review Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    author: UserId,
    media: MediaRef,
    content: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateReviewCommandError {
    #[error("Unknown media type: {0}")]
    InvalidMediaType(String),

    #[error("Content too short")]
    ContentTooShort,
}

impl CreateReviewCommand {
    pub fn new(
        author: UserId,
        media_type: &str,
        media_id: String,
        media_title: String,
        media_poster: String,
        content: String,
    ) -> Result<Self, CreateReviewCommandError> {
        let media_type = media_type
            .parse::<MediaType>()
            .map_err(|_| CreateReviewCommandError::InvalidMediaType(media_type.to_string()))?;

        if content.chars().count() < CONTENT_MIN_CHARS {
            return Err(CreateReviewCommandError::ContentTooShort);
        }

        Ok(Self {
            author,
            media: MediaRef {
                media_type,
                media_id,
                media_title,
                media_poster,
            },
            content,
        })
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn media(&self) -> &MediaRef {
        &self.media
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateReviewError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(&self, command: CreateReviewCommand) -> Result<Review, CreateReviewError>;
}
