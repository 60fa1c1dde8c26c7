// Builds the merged catalog for one client session.
//
// Normal mode reads the document store under a timeout and degrades to the
// seed set on failure. Draft mode reads the client's local override list and
// degrades to no overrides. Neither path returns an error.

use crate::modules::catalog::adapters::outbound::local_overrides::load_overrides;
use crate::modules::catalog::adapters::outbound::project_store::{ProjectStore, ProjectStoreError};
use crate::modules::catalog::core::aggregate::{CatalogMode, CatalogSources, aggregate_for};
use crate::modules::catalog::core::project::Project;
use crate::shared::core::session::ClientSession;
use crate::shared::infrastructure::local_store::LocalStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Which remote records a catalog is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogScope {
    /// Published records only, for the public gallery.
    Public,
    /// Every record including drafts, for the admin area.
    Admin,
}

pub struct LoadCatalogHandler {
    seed: Arc<Vec<Project>>,
    store: Arc<dyn ProjectStore>,
    local_store: Arc<dyn LocalStore>,
    remote_timeout: Duration,
}

impl LoadCatalogHandler {
    pub fn new(
        seed: Arc<Vec<Project>>,
        store: Arc<dyn ProjectStore>,
        local_store: Arc<dyn LocalStore>,
        remote_timeout: Duration,
    ) -> Self {
        Self {
            seed,
            store,
            local_store,
            remote_timeout,
        }
    }

    pub fn seed(&self) -> &[Project] {
        &self.seed
    }

    pub async fn handle(&self, session: &ClientSession, scope: CatalogScope) -> Vec<Project> {
        let mut sources = CatalogSources {
            seed: self.seed.to_vec(),
            ..CatalogSources::default()
        };
        match session.mode {
            CatalogMode::Normal => sources.remote = self.fetch_remote(scope).await,
            CatalogMode::Draft => {
                sources.local_overrides =
                    overrides_or_empty(self.local_store.as_ref(), &session.client_id).await
            }
        }
        let catalog = aggregate_for(session.mode, &sources);
        debug!(mode = ?session.mode, ?scope, count = catalog.len(), "catalog loaded");
        catalog
    }

    /// Remote read bounded by the configured timeout. Any failure yields an
    /// empty remote set.
    async fn fetch_remote(&self, scope: CatalogScope) -> Vec<Project> {
        let read = async {
            match scope {
                CatalogScope::Public => self.store.list_published().await,
                CatalogScope::Admin => self.store.list_all().await,
            }
        };
        match tokio::time::timeout(self.remote_timeout, read).await {
            Ok(Ok(projects)) => projects,
            Ok(Err(error)) => {
                warn!(%error, "remote catalog read failed, serving the seed set");
                Vec::new()
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.remote_timeout.as_millis() as u64,
                    "remote catalog read timed out, serving the seed set"
                );
                Vec::new()
            }
        }
    }

    /// Single record read used by the detail view. Store misses and failures
    /// fall back to nothing so the caller can try the seed set.
    pub async fn fetch_remote_one(&self, id: &str) -> Option<Project> {
        match tokio::time::timeout(self.remote_timeout, self.store.get(id)).await {
            Ok(Ok(found)) => found,
            Ok(Err(ProjectStoreError::NotFound(_))) => None,
            Ok(Err(error)) => {
                warn!(%error, project_id = id, "remote project read failed");
                None
            }
            Err(_) => {
                warn!(project_id = id, "remote project read timed out");
                None
            }
        }
    }

    pub async fn local_overrides(&self, client_id: &str) -> Vec<Project> {
        overrides_or_empty(self.local_store.as_ref(), client_id).await
    }
}

async fn overrides_or_empty(store: &dyn LocalStore, client_id: &str) -> Vec<Project> {
    match load_overrides(store, client_id).await {
        Ok(overrides) => overrides,
        Err(error) => {
            warn!(%error, client_id, "local override list unreadable, ignoring it");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod load_catalog_handler_tests {
    use super::*;
    use crate::modules::catalog::adapters::outbound::local_overrides::{
        OVERRIDES_KEY, save_overrides,
    };
    use crate::modules::catalog::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
    use crate::modules::catalog::core::project::ProjectStatus;
    use crate::shared::infrastructure::local_store::in_memory::InMemoryLocalStore;
    use crate::tests::fixtures::projects::ProjectBuilder;
    use rstest::{fixture, rstest};

    const CLIENT: &str = "client-0001";

    type BeforeEachReturn = (Arc<Vec<Project>>, InMemoryProjectStore, InMemoryLocalStore);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let seed = Arc::new(vec![
            ProjectBuilder::new().id("seed-a").build(),
            ProjectBuilder::new().id("seed-b").build(),
        ]);
        let store = InMemoryProjectStore::with_documents(vec![
            ProjectBuilder::new().id("seed-b").title_ko("원격 b").build(),
            ProjectBuilder::new().id("remote-c").build(),
            ProjectBuilder::new()
                .id("remote-draft")
                .status(ProjectStatus::Draft)
                .build(),
        ]);
        (seed, store, InMemoryLocalStore::new())
    }

    fn handler(
        seed: Arc<Vec<Project>>,
        store: InMemoryProjectStore,
        local_store: Arc<InMemoryLocalStore>,
    ) -> LoadCatalogHandler {
        LoadCatalogHandler::new(seed, Arc::new(store), local_store, Duration::from_millis(50))
    }

    fn ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_merge_seed_and_published_records(before_each: BeforeEachReturn) {
        let (seed, store, local_store) = before_each;
        let handler = handler(seed, store, Arc::new(local_store));
        let catalog = handler
            .handle(&ClientSession::new(CLIENT), CatalogScope::Public)
            .await;
        assert_eq!(ids(&catalog), vec!["seed-a", "seed-b", "remote-c"]);
        assert_eq!(catalog[1].title.ko, "원격 b");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_include_remote_drafts_in_the_admin_scope(before_each: BeforeEachReturn) {
        let (seed, store, local_store) = before_each;
        let handler = handler(seed, store, Arc::new(local_store));
        let catalog = handler
            .handle(&ClientSession::new(CLIENT), CatalogScope::Admin)
            .await;
        assert!(catalog.iter().any(|p| p.id == "remote-draft"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_degrade_to_the_seed_set_when_the_store_is_offline(
        before_each: BeforeEachReturn,
    ) {
        let (seed, mut store, local_store) = before_each;
        store.toggle_offline();
        let handler = handler(seed, store, Arc::new(local_store));
        let catalog = handler
            .handle(&ClientSession::new(CLIENT), CatalogScope::Public)
            .await;
        assert_eq!(ids(&catalog), vec!["seed-a", "seed-b"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_degrade_to_the_seed_set_when_the_store_is_slow(
        before_each: BeforeEachReturn,
    ) {
        let (seed, store, local_store) = before_each;
        store.set_delay_read_ms(500);
        let handler = handler(seed, store, Arc::new(local_store));
        let catalog = handler
            .handle(&ClientSession::new(CLIENT), CatalogScope::Public)
            .await;
        assert_eq!(ids(&catalog), vec!["seed-a", "seed-b"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_use_local_overrides_instead_of_the_store_in_draft_mode(
        before_each: BeforeEachReturn,
    ) {
        let (seed, mut store, local_store) = before_each;
        store.toggle_offline();
        save_overrides(
            &local_store,
            CLIENT,
            &[ProjectBuilder::new()
                .id("local-1")
                .status(ProjectStatus::Draft)
                .build()],
        )
        .await
        .unwrap();
        let handler = handler(seed, store, Arc::new(local_store));
        let session = ClientSession::new(CLIENT).with_mode(CatalogMode::Draft);
        let catalog = handler.handle(&session, CatalogScope::Public).await;
        assert_eq!(ids(&catalog), vec!["seed-a", "seed-b", "local-1"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ignore_a_corrupt_override_list(before_each: BeforeEachReturn) {
        let (seed, store, local_store) = before_each;
        local_store
            .set(CLIENT, OVERRIDES_KEY, "{broken".into())
            .await
            .unwrap();
        let handler = handler(seed, store, Arc::new(local_store));
        let session = ClientSession::new(CLIENT).with_mode(CatalogMode::Draft);
        let catalog = handler.handle(&session, CatalogScope::Public).await;
        assert_eq!(ids(&catalog), vec!["seed-a", "seed-b"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_a_single_remote_record(before_each: BeforeEachReturn) {
        let (seed, store, local_store) = before_each;
        let handler = handler(seed, store, Arc::new(local_store));
        assert!(handler.fetch_remote_one("remote-c").await.is_some());
        assert!(handler.fetch_remote_one("missing").await.is_none());
    }
}
