use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::favorite::application::{
    domain::entities::Favorite, ports::incoming::use_cases::GetFavoritesError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List my favorites
#[utoipa::path(
    get,
    path = "/api/v1/user/favorites",
    tag = "favorites",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Caller's favorites, newest first", body = inline(SuccessResponse<Vec<Favorite>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/user/favorites")]
pub async fn get_favorites_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.favorite.get_list.execute(user.user_id).await {
        Ok(favorites) => ApiResponse::success(favorites),
        Err(err) => map_get_favorites_error(err),
    }
}

fn map_get_favorites_error(err: GetFavoritesError) -> HttpResponse {
    match err {
        GetFavoritesError::QueryError(msg) => {
            error!(error = %msg, "Listing favorites failed");
            ApiResponse::internal_error()
        }
    }
}
