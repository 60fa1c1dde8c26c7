// Visibility and mutation rules of the admin area.
//
// Admin is matched before anything else: its rule (every project) replaces
// the ownership filter instead of extending it.

use crate::modules::access::core::state::AccessState;
use crate::modules::catalog::core::project::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    RedirectToLogin,
    AwaitingApproval,
    CreateFirstProject,
    Projects {
        projects: Vec<Project>,
        can_manage_users: bool,
    },
}

pub fn can_view(state: &AccessState, project: &Project) -> bool {
    match state {
        AccessState::Admin(_) => true,
        AccessState::Student(identity) => project.is_owned_by(&identity.uid),
        AccessState::Pending(_) | AccessState::Unauthenticated | AccessState::Loading { .. } => false,
    }
}

pub fn can_mutate(state: &AccessState, project: &Project) -> bool {
    can_view(state, project)
}

pub fn can_create(state: &AccessState) -> bool {
    matches!(state, AccessState::Admin(_) | AccessState::Student(_))
}

pub fn can_manage_users(state: &AccessState) -> bool {
    matches!(state, AccessState::Admin(_))
}

pub fn dashboard_view(state: &AccessState, catalog: &[Project]) -> DashboardView {
    match state {
        AccessState::Loading { .. } => DashboardView::Loading,
        AccessState::Unauthenticated => DashboardView::RedirectToLogin,
        AccessState::Pending(_) => DashboardView::AwaitingApproval,
        AccessState::Admin(_) => DashboardView::Projects {
            projects: catalog.to_vec(),
            can_manage_users: true,
        },
        AccessState::Student(_) => {
            let owned: Vec<Project> = catalog
                .iter()
                .filter(|project| can_view(state, project))
                .cloned()
                .collect();
            if owned.is_empty() {
                DashboardView::CreateFirstProject
            } else {
                DashboardView::Projects {
                    projects: owned,
                    can_manage_users: false,
                }
            }
        }
    }
}
