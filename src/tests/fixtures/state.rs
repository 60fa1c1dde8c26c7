// Wires an AppState over in-memory adapters for inbound adapter tests.

use crate::modules::access::adapters::outbound::role_directory::UserRecord;
use crate::modules::access::adapters::outbound::role_directory_in_memory::InMemoryRoleDirectory;
use crate::modules::access::core::role::Role;
use crate::modules::catalog::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use crate::modules::catalog::adapters::outbound::translator::PrefixTranslator;
use crate::modules::catalog::core::project::Project;
use crate::modules::catalog::core::seed::bundled_seed;
use crate::shared::infrastructure::local_store::in_memory::InMemoryLocalStore;
use crate::shell::config::Config;
use crate::shell::state::{Adapters, AppState};
use std::sync::Arc;
use std::time::Duration;

pub struct TestStateBuilder {
    seed: Vec<Project>,
    documents: Vec<Project>,
    users: Vec<UserRecord>,
    offline_store: bool,
    allow_mock_identity: bool,
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            seed: bundled_seed().unwrap(),
            documents: Vec::new(),
            users: Vec::new(),
            offline_store: false,
            allow_mock_identity: false,
        }
    }

    pub fn with_seed(mut self, seed: Vec<Project>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_documents(mut self, documents: Vec<Project>) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_user(mut self, uid: &str, role: Role) -> Self {
        self.users.push(UserRecord {
            uid: uid.to_string(),
            email: format!("{uid}@dsu.ac.kr"),
            role,
            created_at: 1_700_000_000_000,
        });
        self
    }

    pub fn offline_store(mut self) -> Self {
        self.offline_store = true;
        self
    }

    pub fn allow_mock_identity(mut self, allow: bool) -> Self {
        self.allow_mock_identity = allow;
        self
    }

    pub fn build(self) -> AppState {
        let mut projects = InMemoryProjectStore::with_documents(self.documents);
        if self.offline_store {
            projects.toggle_offline();
        }
        let config = Config {
            remote_fetch_timeout: Duration::from_millis(200),
            allow_mock_identity: self.allow_mock_identity,
            ..Config::default()
        };
        AppState::new(
            &config,
            Adapters {
                seed: self.seed,
                projects: Arc::new(projects),
                local_store: Arc::new(InMemoryLocalStore::new()),
                roles: Arc::new(InMemoryRoleDirectory::with_users(self.users)),
                translator: Arc::new(PrefixTranslator),
            },
        )
    }
}
