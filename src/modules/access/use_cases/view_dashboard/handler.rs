use crate::modules::access::core::permissions::{DashboardView, dashboard_view};
use crate::modules::access::core::state::AccessState;
use crate::modules::access::use_cases::resolve_access::handler::ResolveAccessHandler;
use crate::modules::access::use_cases::view_dashboard::projection::DashboardStats;
use crate::modules::catalog::use_cases::load_catalog::handler::{CatalogScope, LoadCatalogHandler};
use crate::shared::core::session::ClientSession;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub access: AccessState,
    pub view: DashboardView,
    /// Present only when the view lists projects.
    pub stats: Option<DashboardStats>,
}

pub struct ViewDashboardHandler {
    access: Arc<ResolveAccessHandler>,
    catalog: Arc<LoadCatalogHandler>,
}

impl ViewDashboardHandler {
    pub fn new(access: Arc<ResolveAccessHandler>, catalog: Arc<LoadCatalogHandler>) -> Self {
        Self { access, catalog }
    }

    pub async fn handle(&self, session: &ClientSession) -> Dashboard {
        let access = self.access.handle(session.identity.clone()).await;
        let catalog = match access {
            AccessState::Admin(_) | AccessState::Student(_) => {
                self.catalog.handle(session, CatalogScope::Admin).await
            }
            _ => Vec::new(),
        };
        let view = dashboard_view(&access, &catalog);
        let stats = match &view {
            DashboardView::Projects { projects, .. } => Some(DashboardStats::over(projects)),
            _ => None,
        };
        Dashboard {
            access,
            view,
            stats,
        }
    }
}
