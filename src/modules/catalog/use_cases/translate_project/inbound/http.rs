use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::catalog::core::project::Project;
use crate::modules::catalog::use_cases::translate_project::handler::TranslateProjectError;
use crate::shared::core::session::ClientSession;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    session: ClientSession,
    body: Result<Json<Project>, JsonRejection>,
) -> impl IntoResponse {
    let Json(project) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let access = state.resolve_access.handle(session.identity.clone()).await;
    match state.translate_project.handle(&access, project).await {
        Ok(translated) => Json(translated).into_response(),
        Err(TranslateProjectError::Forbidden) => StatusCode::FORBIDDEN.into_response(),
        Err(TranslateProjectError::NothingToTranslate) => {
            StatusCode::UNPROCESSABLE_ENTITY.into_response()
        }
        Err(e @ TranslateProjectError::Translation(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e)
        }
    }
}
