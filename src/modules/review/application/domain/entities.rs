use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{DocumentMeta, MediaRef};

pub const CONTENT_MIN_CHARS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub user: UserId,
    #[serde(flatten)]
    pub media: MediaRef,
    pub content: String,
}

impl Review {
    pub fn new(user: UserId, media: MediaRef, content: String) -> Self {
        Self {
            meta: DocumentMeta::new(),
            user,
            media,
            content,
        }
    }
}
