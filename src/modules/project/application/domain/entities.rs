use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectCategoryView {
    pub id: Uuid,
    #[schema(example = "Web Design")]
    pub name: String,
    #[schema(example = "web-design")]
    pub slug: String,
    pub order: i32,
    /// Active projects in this category, counted on read.
    pub project_count: u64,
}

/// Card shape used by list endpoints and page aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectListItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category_name: String,
    pub category_slug: String,
    pub short_description: String,
    pub thumbnail: Option<String>,
    #[schema(example = json!(["React", "Node.js"]))]
    pub technologies_list: Vec<String>,
    pub is_featured: bool,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub case_study_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetail {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category_name: String,
    pub category_slug: String,
    pub short_description: String,
    pub full_description: String,
    pub thumbnail: Option<String>,
    pub featured_image: Option<String>,
    pub technologies_list: Vec<String>,
    pub is_featured: bool,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub case_study_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filters for the project list. All set filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Exact match on the owning category's slug.
    pub category_slug: Option<String>,
    pub featured_only: bool,
    /// Case-insensitive substring over title, short description and technologies.
    pub search: Option<String>,
    pub limit: Option<u64>,
}

impl ProjectFilter {
    pub fn featured(limit: u64) -> Self {
        Self {
            featured_only: true,
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Bulk operations offered to the management interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectAction {
    MarkFeatured,
    RemoveFeatured,
    Activate,
    Deactivate,
}
