use crate::modules::catalog::core::project::Project;
use std::path::Path;
use thiserror::Error;

const BUNDLED_SEED: &str = include_str!("seed_projects.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The default projects shipped with the binary.
pub fn bundled_seed() -> Result<Vec<Project>, SeedError> {
    Ok(serde_json::from_str(BUNDLED_SEED)?)
}

/// Seed set from `path` when given, the bundled set otherwise.
pub fn load_seed(path: Option<&Path>) -> Result<Vec<Project>, SeedError> {
    let Some(path) = path else {
        return bundled_seed();
    };
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
