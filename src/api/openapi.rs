use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::adapter::incoming::web::requests::{
    SigninRequest, SignupRequest, UpdatePasswordRequest,
};
use crate::auth::application::domain::entities::{AuthSession, UserId, UserInfo};
use crate::favorite::adapter::incoming::web::requests::AddFavoriteRequest;
use crate::favorite::application::domain::entities::Favorite;
use crate::review::adapter::incoming::web::requests::CreateReviewRequest;
use crate::review::application::domain::entities::Review;
use crate::shared::domain::{DocumentMeta, MediaRef, MediaType};
use crate::shared::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CineTrack API",
        version = "1.0.0",
        description = "Accounts, favorite movies and TV shows, and reviews"
    ),
    paths(
        // User endpoints
        crate::auth::adapter::incoming::web::routes::signup_user_handler,
        crate::auth::adapter::incoming::web::routes::signin_user_handler,
        crate::auth::adapter::incoming::web::routes::update_password_handler,
        crate::auth::adapter::incoming::web::routes::get_user_info_handler,

        // Favorite endpoints
        crate::favorite::adapter::incoming::web::routes::get_favorites_handler,
        crate::favorite::adapter::incoming::web::routes::add_favorite_handler,
        crate::favorite::adapter::incoming::web::routes::remove_favorite_handler,

        // Review endpoints
        crate::review::adapter::incoming::web::routes::get_reviews_handler,
        crate::review::adapter::incoming::web::routes::create_review_handler,
        crate::review::adapter::incoming::web::routes::remove_review_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FieldError,

            // Shared
            DocumentMeta,
            MediaType,
            MediaRef,

            // User
            SignupRequest,
            SigninRequest,
            UpdatePasswordRequest,
            UserId,
            UserInfo,
            AuthSession,

            // Favorites & reviews
            AddFavoriteRequest,
            Favorite,
            CreateReviewRequest,
            Review
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "user", description = "Account endpoints"),
        (name = "favorites", description = "Favorite media of the signed-in user"),
        (name = "reviews", description = "Reviews written by the signed-in user"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by signup or signin"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
