use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::review::application::ports::incoming::use_cases::RemoveReviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

const REVIEW_NOT_FOUND: &str = "Review não encontrado";

/// Delete one of my reviews
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{review_id}",
    tag = "reviews",
    params(("review_id" = String, Path, description = "Review id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Review removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such review for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/reviews/{review_id}")]
pub async fn remove_review_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Ok(review_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("REVIEW_NOT_FOUND", REVIEW_NOT_FOUND);
    };

    match data.review.remove.execute(user.user_id, review_id).await {
        Ok(()) => {
            info!(%review_id, user_id = %user.user_id, "Review removed");
            ApiResponse::no_content()
        }
        Err(err) => map_remove_review_error(err),
    }
}

fn map_remove_review_error(err: RemoveReviewError) -> HttpResponse {
    match err {
        RemoveReviewError::ReviewNotFound => {
            ApiResponse::not_found("REVIEW_NOT_FOUND", REVIEW_NOT_FOUND)
        }
        RemoveReviewError::RepositoryError(msg) => {
            error!(error = %msg, "Removing review failed");
            ApiResponse::internal_error()
        }
    }
}
