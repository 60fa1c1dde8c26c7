use crate::shared::infrastructure::local_store::{LocalStore, LocalStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLocalStore {
    entries: RwLock<HashMap<(String, String), String>>,
    is_offline: bool,
}

impl InMemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), LocalStoreError> {
        if self.is_offline {
            return Err(LocalStoreError::Unavailable("Local store offline".into()));
        }
        Ok(())
    }
}

fn entry_key(client_id: &str, key: &str) -> (String, String) {
    (client_id.to_string(), key.to_string())
}

#[async_trait::async_trait]
impl LocalStore for InMemoryLocalStore {
    async fn get(&self, client_id: &str, key: &str) -> Result<Option<String>, LocalStoreError> {
        self.ensure_online()?;
        Ok(self.entries.read().await.get(&entry_key(client_id, key)).cloned())
    }

    async fn set(&self, client_id: &str, key: &str, value: String) -> Result<(), LocalStoreError> {
        self.ensure_online()?;
        self.entries
            .write()
            .await
            .insert(entry_key(client_id, key), value);
        Ok(())
    }

    async fn set_if_absent(
        &self,
        client_id: &str,
        key: &str,
        value: String,
    ) -> Result<bool, LocalStoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        let slot = entry_key(client_id, key);
        if guard.contains_key(&slot) {
            return Ok(false);
        }
        guard.insert(slot, value);
        Ok(true)
    }

    async fn remove(&self, client_id: &str, key: &str) -> Result<(), LocalStoreError> {
        self.ensure_online()?;
        self.entries.write().await.remove(&entry_key(client_id, key));
        Ok(())
    }
}
