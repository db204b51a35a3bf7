use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::requests::{SignupRequest, USERNAME_TAKEN};
use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::use_cases::signup_user::{SignupCommand, SignupError};
use crate::shared::api::{ApiResponse, ValidatedBody};
use crate::shared::validation::FieldError;
use crate::AppState;

/// Create an account
///
/// Registers the user and returns an access token together with the new profile.
#[utoipa::path(
    post,
    path = "/api/v1/user/signup",
    tag = "user",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSession>)),
        (status = 400, description = "Validation failed or username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/user/signup")]
pub async fn signup_user_handler(
    payload: ValidatedBody<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.into_inner();
    info!(username = %request.username, "Signup attempt");

    let command = SignupCommand {
        username: request.username,
        display_name: request.display_name,
        password: request.password,
    };

    match data.signup_user_use_case.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.meta.id, "User signed up");
            ApiResponse::created(session)
        }
        Err(err) => map_signup_error(err),
    }
}

fn map_signup_error(err: SignupError) -> HttpResponse {
    match err {
        SignupError::UsernameTaken => {
            ApiResponse::validation_failed(&[FieldError::new("username", USERNAME_TAKEN)])
        }
        other => {
            error!(error = %other, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}
