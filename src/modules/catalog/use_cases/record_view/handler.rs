// Counts a project view at most once per client session.
//
// The session marker is claimed before the store write and released again if
// the write fails, so a failed attempt can be retried by the same client.
// An ephemeral session is its own single-request session: it counts without
// leaving a marker behind.

use crate::modules::catalog::adapters::outbound::project_store::{ProjectStore, ProjectStoreError};
use crate::shared::core::session::ClientSession;
use crate::shared::infrastructure::local_store::{LocalStore, LocalStoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum RecordViewError {
    #[error(transparent)]
    Store(#[from] ProjectStoreError),

    #[error(transparent)]
    Session(#[from] LocalStoreError),
}

pub fn viewed_marker(project_id: &str) -> String {
    format!("viewed_{project_id}")
}

pub struct RecordViewHandler {
    store: Arc<dyn ProjectStore>,
    local_store: Arc<dyn LocalStore>,
}

impl RecordViewHandler {
    pub fn new(store: Arc<dyn ProjectStore>, local_store: Arc<dyn LocalStore>) -> Self {
        Self { store, local_store }
    }

    /// Returns whether this call incremented the counter.
    pub async fn handle(
        &self,
        session: &ClientSession,
        project_id: &str,
    ) -> Result<bool, RecordViewError> {
        if session.is_draft() {
            debug!(project_id, "draft mode, view not counted");
            return Ok(false);
        }

        if session.ephemeral {
            return self.increment(project_id).await.map_err(Into::into);
        }

        let marker = viewed_marker(project_id);
        let claimed = self
            .local_store
            .set_if_absent(&session.client_id, &marker, "true".into())
            .await?;
        if !claimed {
            return Ok(false);
        }

        match self.increment(project_id).await {
            Ok(counted) => Ok(counted),
            Err(e) => {
                self.local_store
                    .remove(&session.client_id, &marker)
                    .await?;
                Err(e.into())
            }
        }
    }

    async fn increment(&self, project_id: &str) -> Result<bool, ProjectStoreError> {
        match self.store.increment_views(project_id).await {
            Ok(views) => {
                debug!(project_id, views, "view counted");
                Ok(true)
            }
            Err(ProjectStoreError::NotFound(_)) => {
                debug!(project_id, "no stored record for project, view not counted");
                Ok(false)
            }
            Err(e) => {
                error!(error = %e, project_id, "failed to count view");
                Err(e)
            }
        }
    }
}
