use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserInfo;
use crate::auth::application::use_cases::fetch_user_info::FetchUserInfoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user
#[utoipa::path(
    get,
    path = "/api/v1/user/info",
    tag = "user",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile of the caller", body = inline(SuccessResponse<UserInfo>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/v1/user/info")]
pub async fn get_user_info_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_info_use_case.execute(user.user_id).await {
        Ok(info) => ApiResponse::success(info),
        Err(err) => map_fetch_user_info_error(err),
    }
}

fn map_fetch_user_info_error(err: FetchUserInfoError) -> HttpResponse {
    match err {
        FetchUserInfoError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "Usuário não existe")
        }
        FetchUserInfoError::QueryError(msg) => {
            error!("Failed to load user info: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
