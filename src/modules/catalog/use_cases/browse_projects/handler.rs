use crate::modules::catalog::core::filter::{CategoryFilter, SearchQuery, filter_projects};
use crate::modules::catalog::core::project::Project;
use crate::modules::catalog::use_cases::browse_projects::projection::ProjectCard;
use crate::modules::catalog::use_cases::load_catalog::handler::{CatalogScope, LoadCatalogHandler};
use crate::shared::core::session::ClientSession;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseProjects {
    pub category: CategoryFilter,
    pub query: SearchQuery,
}

impl BrowseProjects {
    pub fn new(category: Option<&str>, query: Option<&str>) -> Self {
        Self {
            category: CategoryFilter::from(category),
            query: query.map(SearchQuery::parse).unwrap_or_default(),
        }
    }
}

pub struct BrowseProjectsHandler {
    catalog: Arc<LoadCatalogHandler>,
}

impl BrowseProjectsHandler {
    pub fn new(catalog: Arc<LoadCatalogHandler>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, session: &ClientSession, request: &BrowseProjects) -> Vec<ProjectCard> {
        let catalog = self.catalog.handle(session, CatalogScope::Public).await;
        let visible = filter_or_unfiltered(&catalog, || {
            filter_projects(&catalog, &request.category, &request.query)
        });
        visible.iter().map(ProjectCard::from).collect()
    }
}

/// Runs `filter`, handing back the whole collection if it panics.
pub fn filter_or_unfiltered<F>(collection: &[Project], filter: F) -> Vec<Project>
where
    F: FnOnce() -> Vec<Project>,
{
    match catch_unwind(AssertUnwindSafe(filter)) {
        Ok(visible) => visible,
        Err(_) => {
            error!(
                count = collection.len(),
                "project filter failed, showing the unfiltered collection"
            );
            collection.to_vec()
        }
    }
}
