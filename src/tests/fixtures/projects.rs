// Shared test fixture for Project records.
// The canonical project lives in json/project.json in its legacy document
// shape, so every builder also goes through record normalisation.

use crate::modules::catalog::core::project::{Project, ProjectStatus};
use crate::shared::core::primitives::LocalizedText;
use std::fs;

const PROJECT_JSON: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/tests/fixtures/json/project.json"
);

pub struct ProjectBuilder {
    inner: Project,
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProjectBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(PROJECT_JSON).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn status(mut self, v: ProjectStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn title_ko(mut self, v: impl Into<String>) -> Self {
        self.inner.title.ko = v.into();
        self
    }

    pub fn title_en(mut self, v: impl Into<String>) -> Self {
        self.inner.title.en = v.into();
        self
    }

    pub fn title(mut self, v: LocalizedText) -> Self {
        self.inner.title = v;
        self
    }

    pub fn description_en(mut self, v: impl Into<String>) -> Self {
        self.inner.description.en = v.into();
        self
    }

    pub fn member_en(mut self, v: impl Into<String>) -> Self {
        if let Some(member) = self.inner.members.first_mut() {
            member.name.en = v.into();
        }
        self
    }

    pub fn member_ko(mut self, v: impl Into<String>) -> Self {
        if let Some(member) = self.inner.members.first_mut() {
            member.name.ko = v.into();
        }
        self
    }

    pub fn genres(mut self, v: &[&str]) -> Self {
        self.inner.genres = v.iter().map(|tag| tag.to_string()).collect();
        self
    }

    pub fn technique(mut self, v: &[&str]) -> Self {
        self.inner.technique = v.iter().map(|tag| tag.to_string()).collect();
        self
    }

    pub fn thumbnail_url(mut self, v: impl Into<String>) -> Self {
        self.inner.thumbnail_url = v.into();
        self
    }

    pub fn trailer_youtube_id(mut self, v: impl Into<String>) -> Self {
        self.inner.trailer_youtube_id = v.into();
        self
    }

    pub fn full_youtube_id(mut self, v: impl Into<String>) -> Self {
        self.inner.full_youtube_id = v.into();
        self
    }

    pub fn youtube_id(mut self, v: impl Into<String>) -> Self {
        self.inner.youtube_id = v.into();
        self
    }

    pub fn views(mut self, v: u64) -> Self {
        self.inner.views = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = Some(v.into());
        self
    }

    pub fn created_by_none(mut self) -> Self {
        self.inner.created_by = None;
        self.inner.created_by_email = None;
        self
    }

    pub fn build(self) -> Project {
        self.inner
    }
}

#[cfg(test)]
mod project_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ProjectBuilder::default().build();
        assert_eq!(built.id, "project-fixed-0001");
        assert_eq!(built.status, ProjectStatus::Published);
        assert_eq!(built.title.en, "Cyberpunk: Edgerunners Fan");
        assert_eq!(built.members.len(), 1);
        assert_eq!(built.members[0].name.en, "Kim Art");
        assert_eq!(built.created_by.as_deref(), Some("student-fixed-0001"));
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = ProjectBuilder::new()
            .id("p-123")
            .status(ProjectStatus::Draft)
            .title_ko("제목")
            .genres(&["2D"])
            .technique(&[])
            .views(7)
            .created_by("owner")
            .build();

        assert_eq!(custom.id, "p-123");
        assert_eq!(custom.status, ProjectStatus::Draft);
        assert_eq!(custom.title.ko, "제목");
        assert_eq!(custom.genres, vec!["2D"]);
        assert!(custom.technique.is_empty());
        assert_eq!(custom.views, 7);
        assert_eq!(custom.created_by.as_deref(), Some("owner"));
    }
}
