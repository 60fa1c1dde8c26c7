use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::json;
use std::fmt::Display;

use crate::modules::access::use_cases::manage_users::inbound::http as users_http;
use crate::modules::access::use_cases::view_dashboard::inbound::http as dashboard_http;
use crate::modules::catalog::use_cases::browse_projects::inbound::http as browse_http;
use crate::modules::catalog::use_cases::get_project::inbound::http as project_http;
use crate::modules::catalog::use_cases::manage_drafts::inbound::http as drafts_http;
use crate::modules::catalog::use_cases::record_view::inbound::http as views_http;
use crate::modules::catalog::use_cases::save_project::inbound::http as save_http;
use crate::modules::catalog::use_cases::translate_project::inbound::http as translate_http;
use crate::shell::graphql::{self, GRAPHQL_PATH, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/projects", get(browse_http::handle))
        .route("/projects/{id}", get(project_http::handle))
        .route("/projects/{id}/views", post(views_http::handle))
        .route("/admin/dashboard", get(dashboard_http::handle))
        .route("/admin/projects", post(save_http::create))
        .route("/admin/projects/translate", post(translate_http::handle))
        .route("/admin/projects/{id}", put(save_http::update))
        .route("/admin/users", get(users_http::list_users))
        .route("/admin/users/{uid}/role", put(users_http::change_role))
        .route("/session/test-mode", put(drafts_http::set_test_mode))
        .route("/session/drafts", delete(drafts_http::clear_drafts))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .with_state(state)
}

/// Status with a `{ "error": message }` body for failures the caller should see.
pub fn error_response(status: StatusCode, error: &impl Display) -> Response {
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
