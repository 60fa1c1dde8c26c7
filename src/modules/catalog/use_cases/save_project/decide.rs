use crate::modules::access::core::permissions::{can_create, can_mutate};
use crate::modules::access::core::state::AccessState;
use crate::modules::catalog::core::project::Project;
use crate::modules::catalog::use_cases::save_project::command::SaveProject;
use crate::modules::catalog::use_cases::save_project::decision::{DecideError, Decision};

/// Validates the form and settles id, ownership and timestamps.
///
/// `existing` is the record the update targets, if any. An update of an id
/// nobody stored yet is treated as a creation under that id.
pub fn decide_save(
    state: &AccessState,
    existing: Option<&Project>,
    command: SaveProject,
    fresh_id: String,
) -> Decision {
    let allowed = match existing {
        Some(project) => can_mutate(state, project),
        None => can_create(state),
    };
    if !allowed {
        return Decision::Rejected {
            reason: DecideError::Forbidden,
        };
    }
    if command.project.title.ko.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingKoreanTitle,
        };
    }

    let Some(caller) = state.identity() else {
        return Decision::Rejected {
            reason: DecideError::Forbidden,
        };
    };

    let mut project = command.project;
    project.id = command.project_id.unwrap_or(fresh_id);
    project.updated_at = Some(command.requested_at);

    match existing.filter(|stored| stored.created_by.is_some()) {
        Some(stored) => {
            project.created_by = stored.created_by.clone();
            project.created_by_email = stored.created_by_email.clone();
        }
        None => {
            project.created_by = Some(caller.uid.clone());
            project.created_by_email = Some(caller.email.clone());
        }
    }
    match existing {
        Some(stored) => {
            project.created_at = stored.created_at.or(Some(command.requested_at));
            project.views = stored.views;
        }
        None => {
            project.created_at = Some(command.requested_at);
            project.views = 0;
        }
    }

    Decision::Accepted { project }
}
