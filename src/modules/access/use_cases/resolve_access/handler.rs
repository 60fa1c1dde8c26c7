// Resolves the access state of the current identity.
//
// Role lookups never fail the request: a missing role document is created
// with the default role, and a directory error degrades to pending.

use crate::modules::access::adapters::outbound::role_directory::{RoleDirectory, UserRecord};
use crate::modules::access::core::evolve::{AccessEvent, evolve};
use crate::modules::access::core::role::{DEFAULT_ROLE, Identity, Role};
use crate::modules::access::core::state::AccessState;
use crate::shared::core::primitives::now_millis;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ResolveAccessHandler {
    directory: Arc<dyn RoleDirectory>,
    allow_mock_identity: bool,
}

impl ResolveAccessHandler {
    pub fn new(directory: Arc<dyn RoleDirectory>, allow_mock_identity: bool) -> Self {
        Self {
            directory,
            allow_mock_identity,
        }
    }

    pub async fn handle(&self, identity: Option<Identity>) -> AccessState {
        let state = evolve(
            AccessState::initial(),
            AccessEvent::IdentityChanged(identity.clone()),
        );
        let Some(identity) = identity else {
            return state;
        };

        if identity.is_mock() {
            if !self.allow_mock_identity {
                warn!("mock identity presented while disabled, treating as signed out");
                return evolve(state, AccessEvent::IdentityChanged(None));
            }
            return evolve(
                state,
                AccessEvent::RoleResolved {
                    identity,
                    role: Role::Admin,
                },
            );
        }

        let role = self.lookup_role(&identity).await;
        debug!(uid = %identity.uid, role = role.as_str(), "access resolved");
        evolve(state, AccessEvent::RoleResolved { identity, role })
    }

    async fn lookup_role(&self, identity: &Identity) -> Role {
        match self.directory.get(&identity.uid).await {
            Ok(Some(record)) => record.role,
            Ok(None) => {
                let record = UserRecord {
                    uid: identity.uid.clone(),
                    email: identity.email.clone(),
                    role: DEFAULT_ROLE,
                    created_at: now_millis(),
                };
                match self.directory.create(record).await {
                    Ok(stored) => stored.role,
                    Err(error) => {
                        warn!(%error, uid = %identity.uid, "failed to create role document");
                        DEFAULT_ROLE
                    }
                }
            }
            Err(error) => {
                warn!(%error, uid = %identity.uid, "role lookup failed, treating as pending");
                Role::Pending
            }
        }
    }
}
