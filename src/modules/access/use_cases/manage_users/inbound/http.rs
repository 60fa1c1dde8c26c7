use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::access::adapters::outbound::role_directory::RoleDirectoryError;
use crate::modules::access::core::role::Role;
use crate::modules::access::use_cases::manage_users::handler::ManageUsersError;
use crate::shared::core::session::ClientSession;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ChangeRoleBody {
    pub role: Role,
}

fn status_for(error: &ManageUsersError) -> StatusCode {
    match error {
        ManageUsersError::Forbidden => StatusCode::FORBIDDEN,
        ManageUsersError::Directory(RoleDirectoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        ManageUsersError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn list_users(State(state): State<AppState>, session: ClientSession) -> impl IntoResponse {
    let access = state.resolve_access.handle(session.identity).await;
    match state.manage_users.list_users(&access).await {
        Ok(users) => Json(users).into_response(),
        Err(e) => error_response(status_for(&e), &e),
    }
}

pub async fn change_role(
    State(state): State<AppState>,
    session: ClientSession,
    Path(uid): Path<String>,
    body: Result<Json<ChangeRoleBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let access = state.resolve_access.handle(session.identity).await;
    match state.manage_users.change_role(&access, &uid, body.role).await {
        Ok(user) => Json(user).into_response(),
        Err(e) => error_response(status_for(&e), &e),
    }
}
