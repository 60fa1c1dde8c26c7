use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::catalog::use_cases::manage_drafts::handler::ManageDraftsError;
use crate::shared::core::session::ClientSession;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TestModeBody {
    pub enabled: bool,
}

pub async fn set_test_mode(
    State(state): State<AppState>,
    session: ClientSession,
    body: Result<Json<TestModeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.manage_drafts.set_test_mode(&session, body.enabled).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(status_for(&e), &e),
    }
}

fn status_for(error: &ManageDraftsError) -> StatusCode {
    match error {
        ManageDraftsError::Disabled => StatusCode::SERVICE_UNAVAILABLE,
        ManageDraftsError::MissingClientId => StatusCode::BAD_REQUEST,
        ManageDraftsError::Local(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn clear_drafts(
    State(state): State<AppState>,
    session: ClientSession,
) -> impl IntoResponse {
    match state.manage_drafts.clear_drafts(&session).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(status_for(&e), &e),
    }
}

#[cfg(test)]
mod manage_drafts_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{delete, put},
    };
    use tower::ServiceExt;

use crate::shell::state::AppState;
    use crate::tests::fixtures::state::TestStateBuilder;

    use super::{clear_drafts, set_test_mode};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/session/test-mode", put(set_test_mode))
            .route("/session/drafts", delete(clear_drafts))
            .with_state(state)
    }

    fn enable() -> Request<Body> {
        Request::put("/session/test-mode")
            .header("content-type", "application/json")
            .header("x-client-id", "client-0001")
            .body(Body::from(r#"{"enabled":true}"#))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_204_when_enabling_test_mode() {
        let state = TestStateBuilder::new().allow_mock_identity(true).build();
        let response = app(state).oneshot(enable()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn it_should_return_503_when_test_mode_is_disabled() {
        let state = TestStateBuilder::new().allow_mock_identity(false).build();
        let response = app(state).oneshot(enable()).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let state = TestStateBuilder::new().allow_mock_identity(true).build();
        let response = app(state)
            .oneshot(
                Request::put("/session/test-mode")
                    .header("content-type", "application/json")
                    .body(Body::from("on"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_400_without_a_client_id() {
        let state = TestStateBuilder::new().allow_mock_identity(true).build();
        let response = app(state)
            .oneshot(
                Request::put("/session/test-mode")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"enabled":true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_204_when_clearing_drafts() {
        let response = app(TestStateBuilder::new().build())
            .oneshot(
                Request::delete("/session/drafts")
                    .header("x-client-id", "client-0001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
