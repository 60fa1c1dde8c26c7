use serde::{Deserialize, Serialize};

pub const MOCK_ADMIN_UID: &str = "mock-admin";
pub const MOCK_ADMIN_EMAIL: &str = "admin@dsu.ac.kr";

/// Access level stored in an identity's role document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    Admin,
    Student,
    Pending,
}

/// Role written for an identity that signs in for the first time. Admins
/// promote from here.
pub const DEFAULT_ROLE: Role = Role::Pending;

impl Role {
    /// Parses a stored role. Anything unrecognised is treated as pending.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            "student" => Role::Student,
            _ => Role::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Pending => "pending",
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from_stored(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

impl Identity {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
        }
    }

    /// The demo identity used without a real identity service.
    pub fn mock_admin() -> Self {
        Self::new(MOCK_ADMIN_UID, MOCK_ADMIN_EMAIL)
    }

    pub fn is_mock(&self) -> bool {
        self.uid == MOCK_ADMIN_UID
    }
}
