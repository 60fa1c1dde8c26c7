use crate::modules::catalog::core::project::Project;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MostViewed {
    pub id: String,
    pub title: String,
    pub views: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_views: u64,
    pub most_viewed: Option<MostViewed>,
}

impl DashboardStats {
    /// Ties on views keep the earliest project.
    pub fn over(projects: &[Project]) -> Self {
        let most_viewed = projects
            .iter()
            .fold(None::<&Project>, |best, project| match best {
                Some(current) if current.views >= project.views => Some(current),
                _ => Some(project),
            })
            .map(|project| MostViewed {
                id: project.id.clone(),
                title: project.title.ko.clone(),
                views: project.views,
            });
        Self {
            total_projects: projects.len(),
            total_views: projects.iter().map(|project| project.views).sum(),
            most_viewed,
        }
    }
}
