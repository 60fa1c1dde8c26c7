// Role document port.
//
// One document per identity, keyed by uid, holding the email and the stored
// role. The identity service creates the identity; this port only tracks
// what it is allowed to do.

use crate::modules::access::core::role::Role;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub uid: String,
    pub email: String,
    pub role: Role,
    pub created_at: i64,
}

#[derive(Debug, Error)]
pub enum RoleDirectoryError {
    #[error("user {0} not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RoleDirectory: Send + Sync {
    async fn get(&self, uid: &str) -> Result<Option<UserRecord>, RoleDirectoryError>;

    /// Writes the record unless one already exists for the uid. Returns the
    /// stored record either way.
    async fn create(&self, record: UserRecord) -> Result<UserRecord, RoleDirectoryError>;

    async fn set_role(&self, uid: &str, role: Role) -> Result<UserRecord, RoleDirectoryError>;

    async fn list_users(&self) -> Result<Vec<UserRecord>, RoleDirectoryError>;
}
