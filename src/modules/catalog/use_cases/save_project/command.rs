use crate::modules::catalog::core::project::Project;

/// Create (`project_id == None`) or update a project from the admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveProject {
    pub project_id: Option<String>,
    pub project: Project,
    pub requested_at: i64,
}
