use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::shared::core::session::ClientSession;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RecordViewResponse {
    pub counted: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    session: ClientSession,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.record_view.handle(&session, &id).await {
        Ok(counted) => Json(RecordViewResponse { counted }).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e),
    }
}
