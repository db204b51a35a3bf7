use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::favorite::application::ports::incoming::use_cases::RemoveFavoriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

const FAVORITE_NOT_FOUND: &str = "Favorito não encontrado";

/// Remove one of my favorites
#[utoipa::path(
    delete,
    path = "/api/v1/user/favorites/{favorite_id}",
    tag = "favorites",
    params(("favorite_id" = String, Path, description = "Favorite id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such favorite for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/user/favorites/{favorite_id}")]
pub async fn remove_favorite_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(favorite_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("FAVORITE_NOT_FOUND", FAVORITE_NOT_FOUND);
    };

    match data.favorite.remove.execute(user.user_id, favorite_id).await {
        Ok(()) => {
            info!(%favorite_id, user_id = %user.user_id, "Favorite removed");
            ApiResponse::no_content()
        }
        Err(err) => map_remove_favorite_error(err),
    }
}

fn map_remove_favorite_error(err: RemoveFavoriteError) -> HttpResponse {
    match err {
        RemoveFavoriteError::FavoriteNotFound => {
            ApiResponse::not_found("FAVORITE_NOT_FOUND", FAVORITE_NOT_FOUND)
        }
        RemoveFavoriteError::RepositoryError(msg) => {
            error!(error = %msg, "Removing favorite failed");
            ApiResponse::internal_error()
        }
    }
}
