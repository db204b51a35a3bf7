use std::ops::Deref;

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::{
    shared::{
        api::{into_actix_error, ApiResponse},
        validation::{RequestBody, ValidationChain, ValidationFailure},
    },
    AppState,
};

/// A request payload with a declared validation chain.
pub trait RequestSchema: Sized + 'static {
    fn validation_chain(state: &AppState) -> ValidationChain;

    /// Builds the payload once the chain has passed.
    fn from_body(body: &RequestBody) -> Self;
}

/// JSON body that already passed its validation chain.
///
/// Rejects with 400 `VALIDATION_ERROR` listing every failing field, or with
/// 400 `INVALID_JSON` when the body is not JSON at all.
#[derive(Debug)]
pub struct ValidatedBody<T>(pub T);

impl<T> ValidatedBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedBody<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: RequestSchema> FromRequest for ValidatedBody<T> {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let path = req.path().to_string();
        let json = web::Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                tracing::error!("AppState missing while validating {}", path);
                into_actix_error(ApiResponse::internal_error())
            })?;

            let web::Json(value) = json.await?;
            let body = RequestBody::from_value(value);

            match T::validation_chain(&state).validate(&body).await {
                Ok(()) => Ok(ValidatedBody(T::from_body(&body))),
                Err(ValidationFailure::Invalid(errors)) => {
                    tracing::debug!(path = %path, failed = errors.len(), "Request validation failed");
                    Err(into_actix_error(ApiResponse::validation_failed(&errors)))
                }
                Err(ValidationFailure::LookupFailed(msg)) => {
                    tracing::error!(path = %path, "Validation lookup failed: {}", msg);
                    Err(into_actix_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}
