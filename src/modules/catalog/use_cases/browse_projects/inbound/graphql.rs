use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::catalog::use_cases::browse_projects::handler::BrowseProjects;
use crate::modules::catalog::use_cases::browse_projects::projection::ProjectCard;
use crate::shared::core::primitives::LocalizedText;
use crate::shared::core::session::ClientSession;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLocalizedText {
    pub ko: String,
    pub en: String,
    pub ja: String,
    pub zh: String,
}

impl From<LocalizedText> for GqlLocalizedText {
    fn from(v: LocalizedText) -> Self {
        Self {
            ko: v.ko,
            en: v.en,
            ja: v.ja,
            zh: v.zh,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProjectCard {
    pub id: String,
    pub is_featured: bool,
    pub title: GqlLocalizedText,
    pub members: Vec<GqlLocalizedText>,
    pub year: i32,
    pub genres: Vec<String>,
    pub technique: Vec<String>,
    pub thumbnail_url: String,
    pub preview_video_id: Option<String>,
    pub views: u64,
}

impl From<ProjectCard> for GqlProjectCard {
    fn from(v: ProjectCard) -> Self {
        Self {
            id: v.id,
            is_featured: v.is_featured,
            title: v.title.into(),
            members: v.members.into_iter().map(Into::into).collect(),
            year: v.year,
            genres: v.genres,
            technique: v.technique,
            thumbnail_url: v.thumbnail_url,
            preview_video_id: v.preview_video_id,
            views: v.views,
        }
    }
}

#[derive(Default)]
pub struct BrowseProjectsQuery;

#[Object]
impl BrowseProjectsQuery {
    async fn projects(
        &self,
        context: &Context<'_>,
        category: Option<String>,
        query: Option<String>,
    ) -> GqlResult<Vec<GqlProjectCard>> {
        let state = context.data_unchecked::<AppState>();
        let session = context
            .data_opt::<ClientSession>()
            .cloned()
            .unwrap_or_default();
        let request = BrowseProjects::new(category.as_deref(), query.as_deref());
        let cards = state.browse_projects.handle(&session, &request).await;
        Ok(cards.into_iter().map(Into::into).collect())
    }
}
