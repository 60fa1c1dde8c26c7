use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::access::core::permissions::DashboardView;
use crate::modules::access::use_cases::view_dashboard::handler::Dashboard;
use crate::modules::access::use_cases::view_dashboard::projection::DashboardStats;
use crate::modules::catalog::core::project::Project;
use crate::shared::core::session::ClientSession;
use crate::shell::state::AppState;

pub const LOGIN_LOCATION: &str = "/admin/login";

#[derive(Serialize)]
#[serde(tag = "view", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DashboardResponse {
    Loading,
    RedirectToLogin {
        location: &'static str,
    },
    AwaitingApproval {
        email: String,
    },
    CreateFirstProject,
    Projects {
        projects: Vec<Project>,
        can_manage_users: bool,
        stats: DashboardStats,
    },
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        match dashboard.view {
            DashboardView::Loading => Self::Loading,
            DashboardView::RedirectToLogin => Self::RedirectToLogin {
                location: LOGIN_LOCATION,
            },
            DashboardView::AwaitingApproval => Self::AwaitingApproval {
                email: dashboard
                    .access
                    .identity()
                    .map(|identity| identity.email.clone())
                    .unwrap_or_default(),
            },
            DashboardView::CreateFirstProject => Self::CreateFirstProject,
            DashboardView::Projects {
                projects,
                can_manage_users,
            } => Self::Projects {
                stats: dashboard
                    .stats
                    .unwrap_or_else(|| DashboardStats::over(&projects)),
                projects,
                can_manage_users,
            },
        }
    }
}

pub async fn handle(State(state): State<AppState>, session: ClientSession) -> impl IntoResponse {
    let response = DashboardResponse::from(state.view_dashboard.handle(&session).await);
    let status = match response {
        DashboardResponse::RedirectToLogin { .. } => StatusCode::UNAUTHORIZED,
        _ => StatusCode::OK,
    };
    (status, Json(response))
}
