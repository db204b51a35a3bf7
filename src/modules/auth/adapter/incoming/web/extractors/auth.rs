use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN_TYPE},
};
use crate::shared::api::{into_actix_error, ApiResponse};

/// Caller identity taken from a valid `Authorization: Bearer` access token.
///
/// Only the token is checked here; whether the user still exists is up to
/// the use case.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let token_provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("TokenProvider is not registered as app data");
            into_actix_error(ApiResponse::internal_error())
        })?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        into_actix_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    let claims = token_provider.verify_token(&token).map_err(|e| {
        tracing::debug!(error = %e, path = %req.path(), "Rejected bearer token");
        into_actix_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(into_actix_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    Ok(AuthenticatedUser {
        user_id: UserId::from(claims.sub),
    })
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
