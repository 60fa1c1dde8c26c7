use crate::modules::catalog::core::project::Project;
use std::collections::HashMap;

/// Where the catalog comes from for one client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogMode {
    /// Seed set plus records read from the document store.
    #[default]
    Normal,
    /// Seed set plus the client's local override list. No remote read.
    Draft,
}

/// The three project sources, in precedence order lowest first.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub seed: Vec<Project>,
    pub remote: Vec<Project>,
    pub local_overrides: Vec<Project>,
}

/// Merges the sources into one collection with exactly one project per id.
///
/// Later sources overwrite earlier ones. Like an insertion-ordered map, an id
/// keeps the position of its first appearance while carrying the value of its
/// last writer. Records without an id cannot be keyed and are dropped.
pub fn aggregate(seed: &[Project], remote: &[Project], local_overrides: &[Project]) -> Vec<Project> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<Project> = Vec::with_capacity(seed.len() + remote.len());

    for project in seed.iter().chain(remote).chain(local_overrides) {
        if project.id.trim().is_empty() {
            tracing::warn!(title = %project.title.ko, "dropping project without an id");
            continue;
        }
        match positions.get(project.id.as_str()) {
            Some(&index) => merged[index] = project.clone(),
            None => {
                positions.insert(project.id.as_str(), merged.len());
                merged.push(project.clone());
            }
        }
    }

    merged
}

/// Applies the operating mode: normal mode ignores local overrides, draft
/// mode ignores remote records.
pub fn aggregate_for(mode: CatalogMode, sources: &CatalogSources) -> Vec<Project> {
    match mode {
        CatalogMode::Normal => aggregate(&sources.seed, &sources.remote, &[]),
        CatalogMode::Draft => aggregate(&sources.seed, &[], &sources.local_overrides),
    }
}
