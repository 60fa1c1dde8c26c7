use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::catalog::core::project::Project;
use crate::modules::catalog::use_cases::save_project::command::SaveProject;
use crate::modules::catalog::use_cases::save_project::decision::DecideError;
use crate::modules::catalog::use_cases::save_project::handler::SaveProjectError;
use crate::shared::core::primitives::now_millis;
use crate::shared::core::session::ClientSession;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    session: ClientSession,
    body: Result<Json<Project>, JsonRejection>,
) -> impl IntoResponse {
    save(state, session, None, body).await
}

pub async fn update(
    State(state): State<AppState>,
    session: ClientSession,
    Path(id): Path<String>,
    body: Result<Json<Project>, JsonRejection>,
) -> impl IntoResponse {
    save(state, session, Some(id), body).await
}

async fn save(
    state: AppState,
    session: ClientSession,
    project_id: Option<String>,
    body: Result<Json<Project>, JsonRejection>,
) -> Response {
    let Json(project) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let is_create = project_id.is_none();

    let access = state.resolve_access.handle(session.identity.clone()).await;
    let command = SaveProject {
        project_id,
        project,
        requested_at: now_millis(),
    };

    match state.save_project.handle(&session, &access, command).await {
        Ok(saved) if is_create => (StatusCode::CREATED, Json(saved)).into_response(),
        Ok(saved) => Json(saved).into_response(),
        Err(SaveProjectError::Rejected(DecideError::Forbidden)) => {
            StatusCode::FORBIDDEN.into_response()
        }
        Err(SaveProjectError::Rejected(DecideError::MissingKoreanTitle)) => {
            StatusCode::UNPROCESSABLE_ENTITY.into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e),
    }
}
