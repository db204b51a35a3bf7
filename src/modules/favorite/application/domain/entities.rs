use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{DocumentMeta, MediaRef};

/// A media item the user marked as favorite.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub user: UserId,
    #[serde(flatten)]
    pub media: MediaRef,
    pub media_rate: f64,
}

impl Favorite {
    pub fn new(user: UserId, media: MediaRef, media_rate: f64) -> Self {
        Self {
            meta: DocumentMeta::new(),
            user,
            media,
            media_rate,
        }
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user == user
    }
}
