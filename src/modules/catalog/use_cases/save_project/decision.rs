use crate::modules::catalog::core::project::Project;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("a Korean title is required")]
    MissingKoreanTitle,

    #[error("not allowed to modify this project")]
    Forbidden,
}

pub enum Decision {
    Accepted { project: Project },
    Rejected { reason: DecideError },
}
