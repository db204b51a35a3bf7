use std::sync::Arc;

use async_trait::async_trait;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::shared::api::RequestSchema;
use crate::shared::validation::{AsyncRule, FieldChain, RequestBody, ValidationChain};
use crate::AppState;

pub const USERNAME_REQUIRED: &str = "Usuário necessário";
pub const USERNAME_TOO_SHORT: &str = "Minimo de 8 caracteres necessário para o nome de usuário";
pub const USERNAME_TAKEN: &str = "Nome de usuário já utilizado";
pub const PASSWORD_REQUIRED: &str = "Senha necessária";
pub const PASSWORD_TOO_SHORT: &str = "Minimo de 8 caracteres necessário para a senha";
pub const CONFIRM_PASSWORD_MISMATCH: &str = "Senha de confirmação está errada";
pub const DISPLAY_NAME_REQUIRED: &str = "Nome necessário";
pub const DISPLAY_NAME_TOO_SHORT: &str = "Minimo de 8 caracteres necessário o nome";
pub const NEW_PASSWORD_REQUIRED: &str = "Nova senha necessária";
pub const NEW_PASSWORD_TOO_SHORT: &str = "Minimo de 8 caracteres necessário para a nova senha";
pub const CONFIRM_NEW_PASSWORD_REQUIRED: &str = "Confirmação de nova senha necessária";
pub const CONFIRM_NEW_PASSWORD_TOO_SHORT: &str =
    "Minimo de 8 caracteres necessário para confirmação de nova senha";
pub const CONFIRM_NEW_PASSWORD_MISMATCH: &str = "Nova senha de confirmação está errada";

const USERNAME_MIN: usize = 4;
const PASSWORD_MIN: usize = 8;
const DISPLAY_NAME_MIN: usize = 5;

/// Passes when no account uses the username yet.
pub struct UniqueUsername {
    query: Arc<dyn UserQuery + Send + Sync>,
}

impl UniqueUsername {
    pub fn new(query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl AsyncRule for UniqueUsername {
    async fn check(&self, value: &str) -> Result<bool, String> {
        self.query
            .find_by_username(value)
            .await
            .map(|found| found.is_none())
            .map_err(|e| e.to_string())
    }
}

fn username_field() -> FieldChain {
    FieldChain::body("username")
        .exists(USERNAME_REQUIRED)
        .min_length(USERNAME_MIN, USERNAME_TOO_SHORT)
}

fn password_field(name: &'static str) -> FieldChain {
    FieldChain::body(name)
        .exists(PASSWORD_REQUIRED)
        .min_length(PASSWORD_MIN, PASSWORD_TOO_SHORT)
}

#[derive(Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[schema(example = "cinefilo")]
    pub username: String,
    #[schema(example = "pipoca123")]
    pub password: String,
    #[schema(example = "pipoca123")]
    pub confirm_password: String,
    #[schema(example = "Cinéfilo Anônimo")]
    pub display_name: String,
}

impl RequestSchema for SignupRequest {
    fn validation_chain(state: &AppState) -> ValidationChain {
        let unique = Arc::new(UniqueUsername::new(Arc::clone(&state.user_query)));

        ValidationChain::new()
            .field(username_field().unique(unique, USERNAME_TAKEN))
            .field(password_field("password"))
            .field(
                password_field("confirmPassword")
                    .equals_field("password", CONFIRM_PASSWORD_MISMATCH),
            )
            .field(
                FieldChain::body("displayName")
                    .exists(DISPLAY_NAME_REQUIRED)
                    .min_length(DISPLAY_NAME_MIN, DISPLAY_NAME_TOO_SHORT),
            )
    }

    fn from_body(body: &RequestBody) -> Self {
        Self {
            username: body.text("username"),
            password: body.text("password"),
            confirm_password: body.text("confirmPassword"),
            display_name: body.text("displayName"),
        }
    }
}

#[derive(Debug, Clone, ToSchema)]
pub struct SigninRequest {
    #[schema(example = "cinefilo")]
    pub username: String,
    #[schema(example = "pipoca123")]
    pub password: String,
}

impl RequestSchema for SigninRequest {
    fn validation_chain(_state: &AppState) -> ValidationChain {
        ValidationChain::new()
            .field(username_field())
            .field(password_field("password"))
    }

    fn from_body(body: &RequestBody) -> Self {
        Self {
            username: body.text("username"),
            password: body.text("password"),
        }
    }
}

/// `confirmNewPassword` is compared against the current `password` field.
#[derive(Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl RequestSchema for UpdatePasswordRequest {
    fn validation_chain(_state: &AppState) -> ValidationChain {
        ValidationChain::new()
            .field(password_field("password"))
            .field(
                FieldChain::body("newPassword")
                    .exists(NEW_PASSWORD_REQUIRED)
                    .min_length(PASSWORD_MIN, NEW_PASSWORD_TOO_SHORT),
            )
            .field(
                FieldChain::body("confirmNewPassword")
                    .exists(CONFIRM_NEW_PASSWORD_REQUIRED)
                    .min_length(PASSWORD_MIN, CONFIRM_NEW_PASSWORD_TOO_SHORT)
                    .equals_field("password", CONFIRM_NEW_PASSWORD_MISMATCH),
            )
    }

    fn from_body(body: &RequestBody) -> Self {
        Self {
            password: body.text("password"),
            new_password: body.text("newPassword"),
            confirm_new_password: body.text("confirmNewPassword"),
        }
    }
}
