use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessageAction;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ApplyContactMessageActionError, ApplyContactMessageActionUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;

#[derive(Debug, Clone)]
pub struct ApplyContactMessageActionService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> ApplyContactMessageActionService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ApplyContactMessageActionUseCase for ApplyContactMessageActionService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        action: ContactMessageAction,
        mut ids: Vec<Uuid>,
    ) -> Result<u64, ApplyContactMessageActionError> {
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(0);
        }

        self.repository
            .set_read(&ids, action.is_read())
            .await
            .map_err(|e| ApplyContactMessageActionError::RepositoryError(e.to_string()))
    }
}
