use crate::modules::catalog::core::project::Project;
use crate::shared::core::primitives::LocalizedText;
use crate::shared::infrastructure::media::{MediaTransform, optimize_media_url};
use serde::Serialize;

pub const CARD_THUMBNAIL_WIDTH: u32 = 800;

/// Compact listing entry for the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub is_featured: bool,
    pub title: LocalizedText,
    pub members: Vec<LocalizedText>,
    pub year: i32,
    pub genres: Vec<String>,
    pub technique: Vec<String>,
    pub thumbnail_url: String,
    pub preview_video_id: Option<String>,
    pub views: u64,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            is_featured: project.is_featured,
            title: project.title.clone(),
            members: project
                .members
                .iter()
                .map(|member| member.name.clone())
                .collect(),
            year: project.year,
            genres: project.genres.clone(),
            technique: project.technique.clone(),
            thumbnail_url: optimize_media_url(
                &project.thumbnail_url,
                &MediaTransform::width(CARD_THUMBNAIL_WIDTH),
            ),
            preview_video_id: project.preview_video_id().map(str::to_string),
            views: project.views,
        }
    }
}
