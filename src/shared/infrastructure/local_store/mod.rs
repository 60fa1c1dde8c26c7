// Client-scoped key-value persistence.
//
// Purpose
// - Hold small per-client values the way a browser's local or session storage would:
//   the test-mode marker, the local override list, viewed-project markers.
//
// Boundaries
// - Values are opaque strings. Callers own the encoding of what they store.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalStoreError {
    #[error("local store unavailable: {0}")]
    Unavailable(String),

    #[error("corrupt value under {key}: {reason}")]
    Corrupt { key: String, reason: String },
}

#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn get(&self, client_id: &str, key: &str) -> Result<Option<String>, LocalStoreError>;

    async fn set(&self, client_id: &str, key: &str, value: String) -> Result<(), LocalStoreError>;

    /// Stores `value` only when `key` is unset. Returns whether it was stored.
    async fn set_if_absent(
        &self,
        client_id: &str,
        key: &str,
        value: String,
    ) -> Result<bool, LocalStoreError>;

    async fn remove(&self, client_id: &str, key: &str) -> Result<(), LocalStoreError>;
}

pub mod in_memory;
