use crate::modules::catalog::adapters::outbound::local_overrides::{clear_overrides, set_test_mode};
use crate::shared::core::session::ClientSession;
use crate::shared::infrastructure::local_store::{LocalStore, LocalStoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ManageDraftsError {
    #[error("test mode is disabled on this deployment")]
    Disabled,

    #[error("client id header is required to keep local drafts")]
    MissingClientId,

    #[error(transparent)]
    Local(#[from] LocalStoreError),
}

/// Switches a client in and out of draft mode and discards its local drafts.
pub struct ManageDraftsHandler {
    local_store: Arc<dyn LocalStore>,
    allow_test_mode: bool,
}

impl ManageDraftsHandler {
    pub fn new(local_store: Arc<dyn LocalStore>, allow_test_mode: bool) -> Self {
        Self {
            local_store,
            allow_test_mode,
        }
    }

    pub async fn set_test_mode(
        &self,
        session: &ClientSession,
        enabled: bool,
    ) -> Result<(), ManageDraftsError> {
        if enabled && !self.allow_test_mode {
            return Err(ManageDraftsError::Disabled);
        }
        if session.ephemeral {
            return Err(ManageDraftsError::MissingClientId);
        }
        set_test_mode(self.local_store.as_ref(), &session.client_id, enabled).await?;
        info!(client_id = %session.client_id, enabled, "test mode changed");
        Ok(())
    }

    pub async fn clear_drafts(&self, session: &ClientSession) -> Result<(), ManageDraftsError> {
        if session.ephemeral {
            return Err(ManageDraftsError::MissingClientId);
        }
        clear_overrides(self.local_store.as_ref(), &session.client_id).await?;
        info!(client_id = %session.client_id, "local drafts cleared");
        Ok(())
    }
}
