use crate::shared::core::primitives::LocalizedText;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
            ProjectStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub name: LocalizedText,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, String>,
}

impl Member {
    pub fn named(name: LocalizedText) -> Self {
        Self {
            name,
            links: BTreeMap::new(),
        }
    }

    fn has_name(&self) -> bool {
        self.name.ko.trim().len() + self.name.en.trim().len() > 0
    }
}

/// A graduation project in its canonical shape.
///
/// Records are always ingested through [`ProjectRecord`], so legacy documents
/// carrying a single `studentName` arrive here as a one element `members` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProjectRecord")]
pub struct Project {
    pub id: String,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub priority: i64,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub members: Vec<Member>,
    pub year: i32,
    pub genres: Vec<String>,
    pub technique: Vec<String>,
    pub thumbnail_url: String,
    pub artwork_urls: Vec<String>,
    pub trailer_youtube_id: String,
    pub full_youtube_id: String,
    pub youtube_id: String,
    pub views: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Project {
    pub fn is_published(&self) -> bool {
        self.status == ProjectStatus::Published
    }

    pub fn primary_member_name(&self) -> Option<&LocalizedText> {
        self.members.first().map(|member| &member.name)
    }

    /// Genre tags followed by technique tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.genres
            .iter()
            .chain(self.technique.iter())
            .map(String::as_str)
    }

    /// Single video reference for cards: trailer, then full cut, then legacy id.
    pub fn preview_video_id(&self) -> Option<&str> {
        first_non_empty([
            &self.trailer_youtube_id,
            &self.full_youtube_id,
            &self.youtube_id,
        ])
    }

    /// Video shown on the detail page: full cut, then legacy id.
    pub fn feature_video_id(&self) -> Option<&str> {
        first_non_empty([&self.full_youtube_id, &self.youtube_id])
    }

    pub fn is_owned_by(&self, uid: &str) -> bool {
        self.created_by.as_deref() == Some(uid)
    }
}

fn first_non_empty<const N: usize>(candidates: [&String; N]) -> Option<&str> {
    candidates
        .into_iter()
        .map(String::as_str)
        .find(|candidate| !candidate.is_empty())
}

/// Ingestion shape of a project document, as found in the document store,
/// the bundled seed set and the local override list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Option<String>,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub priority: i64,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub members: Vec<Member>,
    pub student_name: Option<LocalizedText>,
    pub year: i32,
    #[serde(deserialize_with = "lenient_tags")]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "lenient_tags")]
    pub technique: Vec<String>,
    pub thumbnail_url: String,
    pub artwork_urls: Vec<String>,
    pub trailer_youtube_id: String,
    pub full_youtube_id: String,
    pub youtube_id: String,
    pub views: u64,
    pub created_by: Option<String>,
    pub created_by_email: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        let members = if record.members.iter().any(Member::has_name) {
            record.members
        } else {
            match record.student_name {
                Some(name) => vec![Member::named(name)],
                None => record.members,
            }
        };

        Self {
            id: record.id.unwrap_or_default(),
            status: record.status,
            is_featured: record.is_featured,
            priority: record.priority,
            title: record.title,
            description: record.description,
            members,
            year: record.year,
            genres: record.genres,
            technique: record.technique,
            thumbnail_url: record.thumbnail_url,
            artwork_urls: record.artwork_urls,
            trailer_youtube_id: record.trailer_youtube_id,
            full_youtube_id: record.full_youtube_id,
            youtube_id: record.youtube_id,
            views: record.views,
            created_by: record.created_by,
            created_by_email: record.created_by_email,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

// Non-string tags are dropped instead of failing the whole record.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(tag) => Some(tag),
            other => {
                tracing::warn!(tag = %other, "dropping malformed tag");
                None
            }
        })
        .collect())
}
