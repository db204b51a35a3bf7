use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::review::adapter::incoming::web::requests::{CreateReviewRequest, CONTENT_TOO_SHORT};
use crate::review::application::{
    domain::entities::Review,
    ports::incoming::use_cases::{CreateReviewCommand, CreateReviewCommandError},
};
use crate::shared::api::{ApiResponse, ValidatedBody};
use crate::shared::validation::{media_fields::MEDIA_TYPE_INVALID, FieldError};
use crate::AppState;

/// Write a review
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    tag = "reviews",
    request_body = CreateReviewRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Review created", body = inline(SuccessResponse<Review>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/reviews")]
pub async fn create_review_handler(
    user: AuthenticatedUser,
    payload: ValidatedBody<CreateReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.into_inner();

    let command = match CreateReviewCommand::new(
        user.user_id,
        &request.media_type,
        request.media_id,
        request.media_title,
        request.media_poster,
        request.content,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.review.create.execute(command).await {
        Ok(review) => {
            info!(review_id = %review.meta.id, user_id = %user.user_id, "Review created");
            ApiResponse::created(review)
        }
        Err(err) => {
            error!(error = %err, "Creating review failed");
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: CreateReviewCommandError) -> HttpResponse {
    let field_error = match err {
        CreateReviewCommandError::InvalidMediaType(_) => {
            FieldError::new("mediatype", MEDIA_TYPE_INVALID)
        }
        CreateReviewCommandError::ContentTooShort => FieldError::new("content", CONTENT_TOO_SHORT),
    };

    ApiResponse::validation_failed(&[field_error])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::application::ports::incoming::use_cases::{
        CreateReviewError, CreateReviewUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Clone, Default)]
    struct MockCreateReview {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CreateReviewUseCase for MockCreateReview {
        async fn execute(&self, command: CreateReviewCommand) -> Result<Review, CreateReviewError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Review::new(
                command.author(),
                command.media().clone(),
                command.content().to_string(),
            ))
        }
    }

    fn body(content: &str) -> Value {
        json!({
            "mediaId": "00000598",
            "content": content,
            "mediatype": "tv",
            "mediaTitle": "Cidade dos Homens",
            "mediaPoster": "/cdh.jpg"
        })
    }

    async fn call(use_case: MockCreateReview, auth: Option<String>, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_create_review(use_case)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(create_review_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/api/v1/reviews").set_json(body);
        if let Some(header) = auth {
            req = req.insert_header(("Authorization", header));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_create_review_returns_document_with_user() {
        let author = Uuid::new_v4();

        let (status, body) = call(
            MockCreateReview::default(),
            Some(bearer(author)),
            body("12345678"),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["user"], author.to_string());
        assert_eq!(body["data"]["mediaType"], "tv");
        assert_eq!(body["data"]["content"], "12345678");
    }

    #[actix_web::test]
    async fn test_create_review_seven_chars_rejected() {
        let use_case = MockCreateReview::default();
        let calls = use_case.calls.clone();

        let (status, body) = call(use_case, Some(bearer(Uuid::new_v4())), body("1234567")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], CONTENT_TOO_SHORT);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_create_review_without_token() {
        let use_case = MockCreateReview::default();
        let calls = use_case.calls.clone();

        let (status, _) = call(use_case, None, body("12345678")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
