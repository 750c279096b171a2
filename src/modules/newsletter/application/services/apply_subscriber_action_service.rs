use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::newsletter::application::domain::entities::SubscriberAction;
use crate::modules::newsletter::application::ports::incoming::use_cases::{
    ApplySubscriberActionError, ApplySubscriberActionUseCase,
};
use crate::modules::newsletter::application::ports::outgoing::NewsletterRepository;

#[derive(Debug, Clone)]
pub struct ApplySubscriberActionService<R>
where
    R: NewsletterRepository + Send + Sync,
{
    repository: R,
}

impl<R> ApplySubscriberActionService<R>
where
    R: NewsletterRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ApplySubscriberActionUseCase for ApplySubscriberActionService<R>
where
    R: NewsletterRepository + Send + Sync,
{
    async fn execute(
        &self,
        action: SubscriberAction,
        mut ids: Vec<Uuid>,
    ) -> Result<u64, ApplySubscriberActionError> {
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(0);
        }

        self.repository
            .set_active(&ids, action.is_active())
            .await
            .map_err(|e| ApplySubscriberActionError::RepositoryError(e.to_string()))
    }
}
