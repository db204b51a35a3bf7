use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::DocumentMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored account. The hash never leaves the application layer.
#[derive(Debug, Clone)]
pub struct User {
    pub meta: DocumentMeta,
    pub username: String,
    pub display_name: String,
    pub password_hash: String,
}

impl User {
    pub fn new(username: String, display_name: String, password_hash: String) -> Self {
        Self {
            meta: DocumentMeta::new(),
            username,
            display_name,
            password_hash,
        }
    }

    pub fn id(&self) -> UserId {
        UserId::from(self.meta.id)
    }

    pub fn info(&self) -> UserInfo {
        UserInfo {
            meta: self.meta,
            username: self.username.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub username: String,
    pub display_name: String,
}

/// Token plus the user it was issued for, returned by signup and signin.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthSession {
    pub token: String,
    #[serde(flatten)]
    pub user: UserInfo,
}
