use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::newsletter::application::domain::entities::SubscriberAction;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplySubscriberActionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ApplySubscriberActionUseCase: Send + Sync {
    async fn execute(
        &self,
        action: SubscriberAction,
        ids: Vec<Uuid>,
    ) -> Result<u64, ApplySubscriberActionError>;
}
