use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessageAction;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplyContactMessageActionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ApplyContactMessageActionUseCase: Send + Sync {
    /// Returns how many messages changed.
    async fn execute(
        &self,
        action: ContactMessageAction,
        ids: Vec<Uuid>,
    ) -> Result<u64, ApplyContactMessageActionError>;
}
