use async_trait::async_trait;
use tracing::info;

use crate::modules::newsletter::application::domain::entities::SubscriptionOutcome;
use crate::modules::newsletter::application::ports::incoming::use_cases::{
    SubscribeCommand, SubscribeError, SubscribeUseCase,
};
use crate::modules::newsletter::application::ports::outgoing::NewsletterRepository;

#[derive(Debug, Clone)]
pub struct SubscribeService<R>
where
    R: NewsletterRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubscribeService<R>
where
    R: NewsletterRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubscribeUseCase for SubscribeService<R>
where
    R: NewsletterRepository + Send + Sync,
{
    async fn execute(&self, command: SubscribeCommand) -> Result<SubscriptionOutcome, SubscribeError> {
        let email = command.email();

        match self.repository.find_by_email(email).await? {
            Some(existing) if existing.is_active => Err(SubscribeError::AlreadySubscribed),
            Some(existing) => {
                // A concurrent request may have reactivated the row first.
                if self.repository.reactivate(existing.id).await? {
                    info!(subscriber_id = %existing.id, "Newsletter subscription reactivated");
                    Ok(SubscriptionOutcome::Reactivated)
                } else {
                    Err(SubscribeError::AlreadySubscribed)
                }
            }
            None => {
                let created = self.repository.create(email).await?;
                info!(subscriber_id = %created.id, "Newsletter subscription created");
                Ok(SubscriptionOutcome::Created)
            }
        }
    }
}
