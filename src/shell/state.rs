use crate::modules::access::adapters::outbound::role_directory::RoleDirectory;
use crate::modules::access::use_cases::manage_users::handler::ManageUsersHandler;
use crate::modules::access::use_cases::resolve_access::handler::ResolveAccessHandler;
use crate::modules::access::use_cases::view_dashboard::handler::ViewDashboardHandler;
use crate::modules::catalog::adapters::outbound::project_store::ProjectStore;
use crate::modules::catalog::adapters::outbound::translator::Translator;
use crate::modules::catalog::core::project::Project;
use crate::modules::catalog::use_cases::browse_projects::handler::BrowseProjectsHandler;
use crate::modules::catalog::use_cases::get_project::handler::GetProjectHandler;
use crate::modules::catalog::use_cases::load_catalog::handler::LoadCatalogHandler;
use crate::modules::catalog::use_cases::manage_drafts::handler::ManageDraftsHandler;
use crate::modules::catalog::use_cases::record_view::handler::RecordViewHandler;
use crate::modules::catalog::use_cases::save_project::handler::SaveProjectHandler;
use crate::modules::catalog::use_cases::translate_project::handler::TranslateProjectHandler;
use crate::shared::infrastructure::local_store::LocalStore;
use crate::shell::config::Config;
use std::sync::Arc;

/// Outbound adapters the service is wired with.
pub struct Adapters {
    pub seed: Vec<Project>,
    pub projects: Arc<dyn ProjectStore>,
    pub local_store: Arc<dyn LocalStore>,
    pub roles: Arc<dyn RoleDirectory>,
    pub translator: Arc<dyn Translator>,
}

#[derive(Clone)]
pub struct AppState {
    pub allow_mock_identity: bool,
    pub local_store: Arc<dyn LocalStore>,
    pub browse_projects: Arc<BrowseProjectsHandler>,
    pub get_project: Arc<GetProjectHandler>,
    pub record_view: Arc<RecordViewHandler>,
    pub save_project: Arc<SaveProjectHandler>,
    pub translate_project: Arc<TranslateProjectHandler>,
    pub manage_drafts: Arc<ManageDraftsHandler>,
    pub resolve_access: Arc<ResolveAccessHandler>,
    pub view_dashboard: Arc<ViewDashboardHandler>,
    pub manage_users: Arc<ManageUsersHandler>,
}

impl AppState {
    pub fn new(config: &Config, adapters: Adapters) -> Self {
        let seed = Arc::new(adapters.seed);

        let load_catalog = Arc::new(LoadCatalogHandler::new(
            seed.clone(),
            adapters.projects.clone(),
            adapters.local_store.clone(),
            config.remote_fetch_timeout,
        ));
        let resolve_access = Arc::new(ResolveAccessHandler::new(
            adapters.roles.clone(),
            config.allow_mock_identity,
        ));

        Self {
            allow_mock_identity: config.allow_mock_identity,
            local_store: adapters.local_store.clone(),
            browse_projects: Arc::new(BrowseProjectsHandler::new(load_catalog.clone())),
            get_project: Arc::new(GetProjectHandler::new(load_catalog.clone())),
            record_view: Arc::new(RecordViewHandler::new(
                adapters.projects.clone(),
                adapters.local_store.clone(),
            )),
            save_project: Arc::new(SaveProjectHandler::new(
                seed,
                adapters.projects,
                adapters.local_store.clone(),
            )),
            translate_project: Arc::new(TranslateProjectHandler::new(adapters.translator)),
            manage_drafts: Arc::new(ManageDraftsHandler::new(
                adapters.local_store,
                config.allow_mock_identity,
            )),
            view_dashboard: Arc::new(ViewDashboardHandler::new(
                resolve_access.clone(),
                load_catalog,
            )),
            manage_users: Arc::new(ManageUsersHandler::new(adapters.roles)),
            resolve_access,
        }
    }
}
