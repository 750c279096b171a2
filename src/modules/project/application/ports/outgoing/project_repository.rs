use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    ProjectAction, ProjectCategoryView, ProjectDetail,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectCategoryData {
    pub name: String,
    pub slug: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectData {
    pub category_id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub thumbnail: Option<String>,
    pub featured_image: Option<String>,
    /// Comma-delimited, already normalized.
    pub technologies: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub case_study_url: Option<String>,
    pub is_featured: bool,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Slug is already in use")]
    SlugTaken,

    #[error("Project category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_category(
        &self,
        data: CreateProjectCategoryData,
    ) -> Result<ProjectCategoryView, ProjectRepositoryError>;

    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectDetail, ProjectRepositoryError>;

    /// Applies `action` to every listed project and returns the rows touched.
    async fn apply_action(
        &self,
        action: ProjectAction,
        ids: &[Uuid],
    ) -> Result<u64, ProjectRepositoryError>;
}
