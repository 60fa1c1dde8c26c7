use crate::modules::access::core::role::Identity;
use crate::modules::catalog::core::aggregate::CatalogMode;

/// Per-request view of one client: which local storage slot it owns, which
/// catalog mode its test-mode marker selects, and who is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSession {
    pub client_id: String,
    pub mode: CatalogMode,
    pub identity: Option<Identity>,
    /// Set when the caller sent no client id. The generated `client_id` lives
    /// for one request only and must not key any stored state.
    pub ephemeral: bool,
}

impl ClientSession {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    pub fn ephemeral(client_id: impl Into<String>) -> Self {
        Self {
            ephemeral: true,
            ..Self::new(client_id)
        }
    }

    pub fn with_mode(mut self, mode: CatalogMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn is_draft(&self) -> bool {
        self.mode == CatalogMode::Draft
    }
}
