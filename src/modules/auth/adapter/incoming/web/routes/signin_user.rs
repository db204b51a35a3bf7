use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::requests::SigninRequest;
use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::use_cases::signin_user::{SigninCommand, SigninError};
use crate::shared::api::{ApiResponse, ValidatedBody};
use crate::AppState;

/// Sign in
///
/// Checks the username and password and returns a fresh access token.
#[utoipa::path(
    post,
    path = "/api/v1/user/signin",
    tag = "user",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<AuthSession>)),
        (
            status = 400,
            description = "Validation failed, unknown user or wrong password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "WRONG_PASSWORD", "message": "Senha incorreta" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/user/signin")]
pub async fn signin_user_handler(
    payload: ValidatedBody<SigninRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.into_inner();
    info!(username = %request.username, "Signin attempt");

    let command = SigninCommand {
        username: request.username,
        password: request.password,
    };

    match data.signin_user_use_case.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.meta.id, "User signed in");
            ApiResponse::success(session)
        }
        Err(err) => map_signin_error(err),
    }
}

fn map_signin_error(err: SigninError) -> HttpResponse {
    match err {
        SigninError::UserNotFound => {
            warn!("Signin for unknown username");
            ApiResponse::bad_request("USER_NOT_FOUND", "Usuário não existe")
        }
        SigninError::WrongPassword => {
            warn!("Signin with wrong password");
            ApiResponse::bad_request("WRONG_PASSWORD", "Senha incorreta")
        }
        other => {
            error!(error = %other, "Signin failed");
            ApiResponse::internal_error()
        }
    }
}
