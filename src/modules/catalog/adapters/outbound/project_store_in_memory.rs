// In memory implementation of the ProjectStore port.
//
// Purpose
// - Run the catalog locally and in tests without the hosted document database.
//
// Responsibilities
// - Keep documents in insertion order, the way the hosted store lists them.
// - Simulate an unreachable or slow backend.

use crate::modules::catalog::adapters::outbound::project_store::{ProjectStore, ProjectStoreError};
use crate::modules::catalog::core::project::Project;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjectStore {
    documents: RwLock<Vec<Project>>,
    is_offline: bool,
    delay_read_ms: AtomicU64,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<Project>) -> Self {
        Self {
            documents: RwLock::new(documents),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_read_ms(&self, delay: u64) {
        self.delay_read_ms.store(delay, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), ProjectStoreError> {
        if self.is_offline {
            return Err(ProjectStoreError::Backend("Project store offline".into()));
        }
        Ok(())
    }

    async fn simulate_latency(&self) {
        let delay = self.delay_read_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list_published(&self) -> Result<Vec<Project>, ProjectStoreError> {
        self.simulate_latency().await;
        self.ensure_online()?;
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .filter(|project| project.is_published())
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Project>, ProjectStoreError> {
        self.simulate_latency().await;
        self.ensure_online()?;
        Ok(self.documents.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Project>, ProjectStoreError> {
        self.simulate_latency().await;
        self.ensure_online()?;
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .find(|project| project.id == id)
            .cloned())
    }

    async fn upsert(&self, project: Project) -> Result<(), ProjectStoreError> {
        self.ensure_online()?;
        let mut guard = self.documents.write().await;
        match guard.iter_mut().find(|existing| existing.id == project.id) {
            Some(existing) => *existing = project,
            None => guard.push(project),
        }
        Ok(())
    }

    async fn increment_views(&self, id: &str) -> Result<u64, ProjectStoreError> {
        self.ensure_online()?;
        let mut guard = self.documents.write().await;
        let project = guard
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or_else(|| ProjectStoreError::NotFound(id.to_string()))?;
        project.views += 1;
        Ok(project.views)
    }
}
