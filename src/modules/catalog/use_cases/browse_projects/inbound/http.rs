use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::catalog::use_cases::browse_projects::handler::BrowseProjects;
use crate::shared::core::session::ClientSession;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct BrowseProjectsParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    session: ClientSession,
    Query(params): Query<BrowseProjectsParams>,
) -> impl IntoResponse {
    let request = BrowseProjects::new(params.category.as_deref(), params.q.as_deref());
    Json(state.browse_projects.handle(&session, &request).await)
}
