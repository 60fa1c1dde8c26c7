use crate::modules::access::adapters::outbound::role_directory::{
    RoleDirectory, RoleDirectoryError, UserRecord,
};
use crate::modules::access::core::permissions::can_manage_users;
use crate::modules::access::core::role::Role;
use crate::modules::access::core::state::AccessState;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ManageUsersError {
    #[error("only admins can manage users")]
    Forbidden,

    #[error(transparent)]
    Directory(#[from] RoleDirectoryError),
}

pub struct ManageUsersHandler {
    directory: Arc<dyn RoleDirectory>,
}

impl ManageUsersHandler {
    pub fn new(directory: Arc<dyn RoleDirectory>) -> Self {
        Self { directory }
    }

    /// Every user, pending approvals first. Order is otherwise kept.
    pub async fn list_users(&self, access: &AccessState) -> Result<Vec<UserRecord>, ManageUsersError> {
        if !can_manage_users(access) {
            return Err(ManageUsersError::Forbidden);
        }
        let mut users = self.directory.list_users().await?;
        users.sort_by_key(|user| user.role != Role::Pending);
        Ok(users)
    }

    pub async fn change_role(
        &self,
        access: &AccessState,
        uid: &str,
        role: Role,
    ) -> Result<UserRecord, ManageUsersError> {
        if !can_manage_users(access) {
            return Err(ManageUsersError::Forbidden);
        }
        match self.directory.set_role(uid, role).await {
            Ok(user) => {
                info!(uid, role = role.as_str(), "role changed");
                Ok(user)
            }
            Err(e) => {
                error!(error = %e, uid, "failed to change role");
                Err(e.into())
            }
        }
    }
}
