use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::core::session::ClientSession;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    session: ClientSession,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.get_project.handle(&session, &id).await {
        Some(detail) => Json(detail).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
