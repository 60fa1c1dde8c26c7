use crate::modules::access::adapters::outbound::role_directory::{
    RoleDirectory, RoleDirectoryError, UserRecord,
};
use crate::modules::access::core::role::Role;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRoleDirectory {
    users: RwLock<Vec<UserRecord>>,
    is_offline: bool,
}

impl InMemoryRoleDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: RwLock::new(users),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RoleDirectoryError> {
        if self.is_offline {
            return Err(RoleDirectoryError::Backend("Role directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RoleDirectory for InMemoryRoleDirectory {
    async fn get(&self, uid: &str) -> Result<Option<UserRecord>, RoleDirectoryError> {
        self.ensure_online()?;
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.uid == uid)
            .cloned())
    }

    async fn create(&self, record: UserRecord) -> Result<UserRecord, RoleDirectoryError> {
        self.ensure_online()?;
        let mut guard = self.users.write().await;
        if let Some(existing) = guard.iter().find(|user| user.uid == record.uid) {
            return Ok(existing.clone());
        }
        guard.push(record.clone());
        Ok(record)
    }

    async fn set_role(&self, uid: &str, role: Role) -> Result<UserRecord, RoleDirectoryError> {
        self.ensure_online()?;
        let mut guard = self.users.write().await;
        let user = guard
            .iter_mut()
            .find(|user| user.uid == uid)
            .ok_or_else(|| RoleDirectoryError::NotFound(uid.to_string()))?;
        user.role = role;
        Ok(user.clone())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, RoleDirectoryError> {
        self.ensure_online()?;
        Ok(self.users.read().await.clone())
    }
}
