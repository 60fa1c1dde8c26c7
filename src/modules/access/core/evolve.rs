use crate::modules::access::core::role::{Identity, Role};
use crate::modules::access::core::state::AccessState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessEvent {
    /// The identity service reported a sign-in, sign-out or switch.
    IdentityChanged(Option<Identity>),
    /// The role for `identity` was looked up (or defaulted).
    RoleResolved { identity: Identity, role: Role },
}

/// Every identity change restarts resolution from scratch. A role that
/// arrives for anyone other than the identity being awaited is stale and
/// ignored.
pub fn evolve(state: AccessState, event: AccessEvent) -> AccessState {
    match (state, event) {
        (_, AccessEvent::IdentityChanged(None)) => AccessState::Unauthenticated,
        (_, AccessEvent::IdentityChanged(Some(identity))) => AccessState::Loading {
            awaiting: Some(identity),
        },
        (
            AccessState::Loading {
                awaiting: Some(awaiting),
            },
            AccessEvent::RoleResolved { identity, role },
        ) if awaiting.uid == identity.uid => AccessState::with_role(identity, role),
        (state, AccessEvent::RoleResolved { .. }) => state,
    }
}
