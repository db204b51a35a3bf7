use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::{
    extractors::AuthenticatedUser, requests::UpdatePasswordRequest,
};
use crate::auth::application::domain::entities::UserInfo;
use crate::auth::application::use_cases::update_password::{
    UpdatePasswordCommand, UpdatePasswordError,
};
use crate::shared::api::{ApiResponse, ValidatedBody};
use crate::AppState;

/// Change password
///
/// Requires the current password; stores the new one.
#[utoipa::path(
    put,
    path = "/api/v1/user/update-password",
    tag = "user",
    request_body = UpdatePasswordRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Password updated", body = inline(SuccessResponse<UserInfo>)),
        (status = 400, description = "Validation failed or wrong current password", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token, or user no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/v1/user/update-password")]
pub async fn update_password_handler(
    user: AuthenticatedUser,
    payload: ValidatedBody<UpdatePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.into_inner();

    let command = UpdatePasswordCommand {
        user_id: user.user_id,
        current_password: request.password,
        new_password: request.new_password,
    };

    match data.update_password_use_case.execute(command).await {
        Ok(info) => {
            info!(user_id = %user.user_id, "Password updated");
            ApiResponse::success(info)
        }
        Err(err) => map_update_password_error(err),
    }
}

fn map_update_password_error(err: UpdatePasswordError) -> HttpResponse {
    match err {
        UpdatePasswordError::UserNotFound => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Usuário não autorizado")
        }
        UpdatePasswordError::WrongPassword => {
            warn!("Password change with wrong current password");
            ApiResponse::bad_request("WRONG_PASSWORD", "Senha incorreta")
        }
        other => {
            error!(error = %other, "Password update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::use_cases::update_password::IUpdatePasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fakes::FakeTokenProvider;
    use crate::tests::support::{bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockUpdatePassword {
        result: Result<(), UpdatePasswordError>,
        received: Arc<Mutex<Option<UpdatePasswordCommand>>>,
    }

    impl MockUpdatePassword {
        fn new(result: Result<(), UpdatePasswordError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl IUpdatePasswordUseCase for MockUpdatePassword {
        async fn execute(
            &self,
            command: UpdatePasswordCommand,
        ) -> Result<UserInfo, UpdatePasswordError> {
            *self.received.lock().unwrap() = Some(command);
            self.result
                .clone()
                .map(|_| User::new("cinefilo".into(), "Cinéfilo".into(), "hash".into()).info())
        }
    }

    fn body() -> Value {
        json!({
            "password": "pipoca123",
            "newPassword": "novasenha123",
            "confirmNewPassword": "pipoca123"
        })
    }

    async fn call(
        use_case: MockUpdatePassword,
        auth: Option<String>,
        body: Value,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_update_password(use_case)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_password_handler),
        )
        .await;

        let mut req = test::TestRequest::put()
            .uri("/api/v1/user/update-password")
            .set_json(body);
        if let Some(header) = auth {
            req = req.insert_header(("Authorization", header));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_update_password_success() {
        let user_id = Uuid::new_v4();
        let use_case = MockUpdatePassword::new(Ok(()));
        let received = use_case.received.clone();

        let (status, body) = call(use_case, Some(bearer(user_id)), body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let command = received.lock().unwrap().clone().unwrap();
        assert_eq!(command.user_id.value(), user_id);
        assert_eq!(command.current_password, "pipoca123");
        assert_eq!(command.new_password, "novasenha123");
    }

    #[actix_web::test]
    async fn test_update_password_requires_token() {
        let use_case = MockUpdatePassword::new(Ok(()));
        let received = use_case.received.clone();

        let (status, _) = call(use_case, None, body()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(received.lock().unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_update_password_auth_checked_before_validation() {
        let (status, body) = call(
            MockUpdatePassword::new(Ok(())),
            Some("Bearer forged".to_string()),
            json!({}),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn test_update_password_confirmation_must_match_current_password() {
        let (status, body) = call(
            MockUpdatePassword::new(Ok(())),
            Some(bearer(Uuid::new_v4())),
            json!({
                "password": "pipoca123",
                "newPassword": "novasenha123",
                "confirmNewPassword": "novasenha123"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"][0]["field"], "confirmNewPassword");
        assert_eq!(
            body["error"]["message"],
            "Nova senha de confirmação está errada"
        );
    }

    #[actix_web::test]
    async fn test_update_password_wrong_current_password() {
        let (status, body) = call(
            MockUpdatePassword::new(Err(UpdatePasswordError::WrongPassword)),
            Some(bearer(Uuid::new_v4())),
            body(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "WRONG_PASSWORD");
    }

    #[actix_web::test]
    async fn test_update_password_for_deleted_user_is_unauthorized() {
        let (status, _) = call(
            MockUpdatePassword::new(Err(UpdatePasswordError::UserNotFound)),
            Some(format!("Bearer {}", FakeTokenProvider::token_for(Uuid::new_v4()))),
            body(),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
