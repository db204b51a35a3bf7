use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::favorite::adapter::incoming::web::requests::{AddFavoriteRequest, MEDIA_RATE_INVALID};
use crate::favorite::application::{
    domain::entities::Favorite,
    ports::incoming::use_cases::{
        AddFavoriteCommand, AddFavoriteCommandError, AddFavoriteError, AddFavoriteOutcome,
    },
};
use crate::shared::api::{ApiResponse, ValidatedBody};
use crate::shared::validation::{media_fields::MEDIA_TYPE_INVALID, FieldError};
use crate::AppState;

/// Add a favorite
///
/// Adding a media id the caller already has returns the stored favorite with 200.
#[utoipa::path(
    post,
    path = "/api/v1/user/favorites",
    tag = "favorites",
    request_body = AddFavoriteRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Favorite created", body = inline(SuccessResponse<Favorite>)),
        (status = 200, description = "Favorite already stored", body = inline(SuccessResponse<Favorite>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/user/favorites")]
pub async fn add_favorite_handler(
    user: AuthenticatedUser,
    payload: ValidatedBody<AddFavoriteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.into_inner();

    let command = match AddFavoriteCommand::new(
        user.user_id,
        &request.media_type,
        request.media_id,
        request.media_title,
        request.media_poster,
        request.media_rate,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.favorite.add.execute(command).await {
        Ok(AddFavoriteOutcome::Created(favorite)) => {
            info!(
                favorite_id = %favorite.meta.id,
                user_id = %user.user_id,
                "Favorite added"
            );
            ApiResponse::created(favorite)
        }
        Ok(AddFavoriteOutcome::AlreadyExists(favorite)) => ApiResponse::success(favorite),
        Err(err) => map_add_favorite_error(err),
    }
}

fn map_command_error(err: AddFavoriteCommandError) -> HttpResponse {
    let field_error = match err {
        AddFavoriteCommandError::InvalidMediaType(_) => {
            FieldError::new("mediatype", MEDIA_TYPE_INVALID)
        }
        AddFavoriteCommandError::InvalidMediaRate => {
            FieldError::new("mediaRate", MEDIA_RATE_INVALID)
        }
    };

    ApiResponse::validation_failed(&[field_error])
}

fn map_add_favorite_error(err: AddFavoriteError) -> HttpResponse {
    error!(error = %err, "Adding favorite failed");
    ApiResponse::internal_error()
}
