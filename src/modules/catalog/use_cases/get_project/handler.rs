use crate::modules::catalog::core::aggregate::CatalogMode;
use crate::modules::catalog::core::project::Project;
use crate::modules::catalog::use_cases::load_catalog::handler::LoadCatalogHandler;
use crate::shared::core::session::ClientSession;
use serde::Serialize;
use std::sync::Arc;

/// A project as shown on its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub feature_video_id: Option<String>,
}

impl From<Project> for ProjectDetail {
    fn from(project: Project) -> Self {
        let feature_video_id = project.feature_video_id().map(str::to_string);
        Self {
            project,
            feature_video_id,
        }
    }
}

pub struct GetProjectHandler {
    catalog: Arc<LoadCatalogHandler>,
}

impl GetProjectHandler {
    pub fn new(catalog: Arc<LoadCatalogHandler>) -> Self {
        Self { catalog }
    }

    /// Normal mode asks the document store first, draft mode the local
    /// overrides. Both fall back to the seed set.
    pub async fn handle(&self, session: &ClientSession, id: &str) -> Option<ProjectDetail> {
        let found = match session.mode {
            CatalogMode::Normal => self.catalog.fetch_remote_one(id).await,
            CatalogMode::Draft => self
                .catalog
                .local_overrides(&session.client_id)
                .await
                .into_iter()
                .find(|project| project.id == id),
        };
        found
            .or_else(|| self.catalog.seed().iter().find(|p| p.id == id).cloned())
            .map(ProjectDetail::from)
    }
}
