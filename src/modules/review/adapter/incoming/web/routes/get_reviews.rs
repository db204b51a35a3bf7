use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::review::application::{
    domain::entities::Review, ports::incoming::use_cases::GetReviewsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List my reviews
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = "reviews",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Caller's reviews, newest first", body = inline(SuccessResponse<Vec<Review>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/reviews")]
pub async fn get_reviews_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.review.get_list.execute(user.user_id).await {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(GetReviewsError::QueryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Listing reviews failed");
            ApiResponse::internal_error()
        }
    }
}
