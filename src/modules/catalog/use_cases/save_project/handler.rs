use crate::modules::access::core::state::AccessState;
use crate::modules::catalog::adapters::outbound::local_overrides::{load_overrides, save_overrides};
use crate::modules::catalog::adapters::outbound::project_store::{ProjectStore, ProjectStoreError};
use crate::modules::catalog::core::aggregate::CatalogMode;
use crate::modules::catalog::core::project::Project;
use crate::modules::catalog::use_cases::save_project::command::SaveProject;
use crate::modules::catalog::use_cases::save_project::decide::decide_save;
use crate::modules::catalog::use_cases::save_project::decision::{DecideError, Decision};
use crate::shared::core::session::ClientSession;
use crate::shared::infrastructure::local_store::{LocalStore, LocalStoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SaveProjectError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] ProjectStoreError),

    #[error(transparent)]
    Local(#[from] LocalStoreError),
}

pub struct SaveProjectHandler {
    seed: Arc<Vec<Project>>,
    store: Arc<dyn ProjectStore>,
    local_store: Arc<dyn LocalStore>,
}

impl SaveProjectHandler {
    pub fn new(
        seed: Arc<Vec<Project>>,
        store: Arc<dyn ProjectStore>,
        local_store: Arc<dyn LocalStore>,
    ) -> Self {
        Self {
            seed,
            store,
            local_store,
        }
    }

    pub async fn handle(
        &self,
        session: &ClientSession,
        access: &AccessState,
        command: SaveProject,
    ) -> Result<Project, SaveProjectError> {
        let result = match session.mode {
            CatalogMode::Normal => self.save_remote(access, command).await,
            CatalogMode::Draft => self.save_local(session, access, command).await,
        };
        match &result {
            Ok(project) => info!(project_id = %project.id, mode = ?session.mode, "project saved"),
            Err(SaveProjectError::Rejected(reason)) => info!(%reason, "project save rejected"),
            Err(e) => error!(error = %e, "project save failed"),
        }
        result
    }

    async fn save_remote(
        &self,
        access: &AccessState,
        command: SaveProject,
    ) -> Result<Project, SaveProjectError> {
        let existing = match command.project_id.as_deref() {
            Some(id) => match self.store.get(id).await? {
                Some(stored) => Some(stored),
                None => self.seed_project(id),
            },
            None => None,
        };
        let project = accept(decide_save(
            access,
            existing.as_ref(),
            command,
            Uuid::now_v7().to_string(),
        ))?;
        self.store.upsert(project.clone()).await?;
        Ok(project)
    }

    /// Draft saves never touch the document store. Updates replace the
    /// override in place or append a new one; creations go to the front.
    async fn save_local(
        &self,
        session: &ClientSession,
        access: &AccessState,
        command: SaveProject,
    ) -> Result<Project, SaveProjectError> {
        let client_id = session.client_id.as_str();
        let mut overrides = load_overrides(self.local_store.as_ref(), client_id).await?;
        let is_update = command.project_id.is_some();

        let existing = command.project_id.as_deref().and_then(|id| {
            overrides
                .iter()
                .find(|project| project.id == id)
                .cloned()
                .or_else(|| self.seed_project(id))
        });
        let project = accept(decide_save(
            access,
            existing.as_ref(),
            command,
            format!("local-{}", Uuid::now_v7()),
        ))?;

        if is_update {
            match overrides.iter_mut().find(|stored| stored.id == project.id) {
                Some(stored) => *stored = project.clone(),
                None => overrides.push(project.clone()),
            }
        } else {
            overrides.insert(0, project.clone());
        }
        save_overrides(self.local_store.as_ref(), client_id, &overrides).await?;
        Ok(project)
    }

    fn seed_project(&self, id: &str) -> Option<Project> {
        self.seed.iter().find(|project| project.id == id).cloned()
    }
}

fn accept(decision: Decision) -> Result<Project, DecideError> {
    match decision {
        Decision::Accepted { project } => Ok(project),
        Decision::Rejected { reason } => Err(reason),
    }
}
