use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectCategoryView;
use crate::modules::project::application::ports::outgoing::ProjectQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectCategoriesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for ListProjectCategoriesError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => ListProjectCategoriesError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListProjectCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectCategoryView>, ListProjectCategoriesError>;
}
