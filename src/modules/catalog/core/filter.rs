use crate::modules::catalog::core::project::Project;

pub const ALL_CATEGORIES: &str = "All";
pub const THREE_D: &str = "3D";

/// Tool names that count as "3D" even when the tag itself is not "3D".
/// Matched case-sensitively as substrings, unlike the exact tag match.
pub const THREE_D_ALIASES: [&str; 3] = ["Maya", "Blender", "Unreal"];

/// Category bar entries offered by the gallery front page.
pub const CATEGORY_FILTERS: [&str; 6] = [
    ALL_CATEGORIES,
    THREE_D,
    "2D",
    "Sci-Fi",
    "Fantasy",
    "Stop Motion",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        let Self::Tag(category) = self else {
            return true;
        };
        let wanted = category.to_lowercase();
        let exact = project.tags().any(|tag| tag.to_lowercase() == wanted);
        if category == THREE_D {
            return exact
                || project
                    .tags()
                    .any(|tag| THREE_D_ALIASES.iter().any(|alias| tag.contains(alias)));
        }
        exact
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }
}

/// Free-text search over the Korean and English title and primary member name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, project: &Project) -> bool {
        if self.is_empty() {
            return true;
        }
        let member = project.primary_member_name();
        [
            Some(project.title.ko.as_str()),
            Some(project.title.en.as_str()),
            member.map(|name| name.ko.as_str()),
            member.map(|name| name.en.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Visible subset of `collection`, in input order. Category and search
/// criteria intersect.
pub fn filter_projects(
    collection: &[Project],
    category: &CategoryFilter,
    query: &SearchQuery,
) -> Vec<Project> {
    collection
        .iter()
        .filter(|project| category.matches(project))
        .filter(|project| query.matches(project))
        .cloned()
        .collect()
}
