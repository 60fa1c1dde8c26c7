// Document store port for project records.
//
// The hosted document database is opaque to the catalog. It only needs a
// published-only query, an everything query for administration, single
// record reads and writes, and an atomic view counter.

use crate::modules::catalog::core::project::Project;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("project {0} not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list_published(&self) -> Result<Vec<Project>, ProjectStoreError>;

    async fn list_all(&self) -> Result<Vec<Project>, ProjectStoreError>;

    async fn get(&self, id: &str) -> Result<Option<Project>, ProjectStoreError>;

    /// Creates the record or replaces the one with the same id.
    async fn upsert(&self, project: Project) -> Result<(), ProjectStoreError>;

    async fn increment_views(&self, id: &str) -> Result<u64, ProjectStoreError>;
}
