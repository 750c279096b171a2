use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectAction;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplyProjectActionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ApplyProjectActionUseCase: Send + Sync {
    /// Returns how many projects were updated.
    async fn execute(&self, action: ProjectAction, ids: Vec<Uuid>) -> Result<u64, ApplyProjectActionError>;
}
