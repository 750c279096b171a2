use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectDetail;
use crate::modules::project::application::ports::outgoing::ProjectQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => GetProjectError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ProjectDetail, GetProjectError>;
}
