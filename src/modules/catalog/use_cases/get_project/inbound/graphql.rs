use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::catalog::use_cases::browse_projects::inbound::graphql::GqlLocalizedText;
use crate::modules::catalog::use_cases::get_project::handler::ProjectDetail;
use crate::shared::core::session::ClientSession;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProject {
    pub id: ID,
    pub status: String,
    pub title: GqlLocalizedText,
    pub description: GqlLocalizedText,
    pub members: Vec<GqlLocalizedText>,
    pub year: i32,
    pub genres: Vec<String>,
    pub technique: Vec<String>,
    pub thumbnail_url: String,
    pub artwork_urls: Vec<String>,
    pub preview_video_id: Option<String>,
    pub feature_video_id: Option<String>,
    pub views: u64,
}

impl From<ProjectDetail> for GqlProject {
    fn from(v: ProjectDetail) -> Self {
        let preview_video_id = v.project.preview_video_id().map(str::to_string);
        let project = v.project;
        Self {
            id: ID(project.id),
            status: project.status.as_str().to_string(),
            title: project.title.into(),
            description: project.description.into(),
            members: project
                .members
                .into_iter()
                .map(|member| member.name.into())
                .collect(),
            year: project.year,
            genres: project.genres,
            technique: project.technique,
            thumbnail_url: project.thumbnail_url,
            artwork_urls: project.artwork_urls,
            preview_video_id,
            feature_video_id: v.feature_video_id,
            views: project.views,
        }
    }
}

#[derive(Default)]
pub struct GetProjectQuery;

#[Object]
impl GetProjectQuery {
    async fn project(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let session = context
            .data_opt::<ClientSession>()
            .cloned()
            .unwrap_or_default();
        Ok(state
            .get_project
            .handle(&session, &id)
            .await
            .map(GqlProject::from))
    }
}
