use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{ProjectFilter, ProjectListItem};
use crate::modules::project::application::ports::outgoing::ProjectQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for ListProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => ListProjectsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectFilter) -> Result<Vec<ProjectListItem>, ListProjectsError>;
}
