// Catalog view of the client-scoped local store.
//
// Responsibilities
// - Read and write the test-mode marker.
// - Encode the local override list as JSON under a single key, the way the
//   edit form persists it client side.

use crate::modules::catalog::core::project::Project;
use crate::shared::infrastructure::local_store::{LocalStore, LocalStoreError};

pub const TEST_MODE_KEY: &str = "test_mode";
pub const OVERRIDES_KEY: &str = "local_projects";

pub async fn is_test_mode(store: &dyn LocalStore, client_id: &str) -> Result<bool, LocalStoreError> {
    Ok(store.get(client_id, TEST_MODE_KEY).await?.is_some())
}

pub async fn set_test_mode(
    store: &dyn LocalStore,
    client_id: &str,
    enabled: bool,
) -> Result<(), LocalStoreError> {
    if enabled {
        store.set(client_id, TEST_MODE_KEY, "true".into()).await
    } else {
        store.remove(client_id, TEST_MODE_KEY).await
    }
}

pub async fn load_overrides(
    store: &dyn LocalStore,
    client_id: &str,
) -> Result<Vec<Project>, LocalStoreError> {
    let Some(raw) = store.get(client_id, OVERRIDES_KEY).await? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|e| LocalStoreError::Corrupt {
        key: OVERRIDES_KEY.to_string(),
        reason: e.to_string(),
    })
}

pub async fn save_overrides(
    store: &dyn LocalStore,
    client_id: &str,
    projects: &[Project],
) -> Result<(), LocalStoreError> {
    let raw = serde_json::to_string(projects).map_err(|e| LocalStoreError::Corrupt {
        key: OVERRIDES_KEY.to_string(),
        reason: e.to_string(),
    })?;
    store.set(client_id, OVERRIDES_KEY, raw).await
}

pub async fn clear_overrides(store: &dyn LocalStore, client_id: &str) -> Result<(), LocalStoreError> {
    store.remove(client_id, OVERRIDES_KEY).await
}
