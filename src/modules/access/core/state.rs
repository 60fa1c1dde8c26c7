use crate::modules::access::core::role::{Identity, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessState {
    /// Waiting for the identity service, or for the role of `awaiting`.
    Loading { awaiting: Option<Identity> },
    Unauthenticated,
    Pending(Identity),
    Student(Identity),
    Admin(Identity),
}

impl AccessState {
    pub fn initial() -> Self {
        AccessState::Loading { awaiting: None }
    }

    pub fn with_role(identity: Identity, role: Role) -> Self {
        match role {
            Role::Admin => AccessState::Admin(identity),
            Role::Student => AccessState::Student(identity),
            Role::Pending => AccessState::Pending(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AccessState::Pending(identity)
            | AccessState::Student(identity)
            | AccessState::Admin(identity) => Some(identity),
            AccessState::Loading { .. } | AccessState::Unauthenticated => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            AccessState::Admin(_) => Some(Role::Admin),
            AccessState::Student(_) => Some(Role::Student),
            AccessState::Pending(_) => Some(Role::Pending),
            AccessState::Loading { .. } | AccessState::Unauthenticated => None,
        }
    }
}
