use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{
    ProjectCategoryView, ProjectDetail, ProjectFilter, ProjectListItem,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Active categories by `order`, each with its active project count.
    async fn list_categories(&self) -> Result<Vec<ProjectCategoryView>, ProjectQueryError>;

    /// Active projects by `order` ascending, then newest first.
    async fn list_projects(
        &self,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectListItem>, ProjectQueryError>;

    /// Active project with this slug. Callers pass a normalized slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ProjectDetail>, ProjectQueryError>;
}
