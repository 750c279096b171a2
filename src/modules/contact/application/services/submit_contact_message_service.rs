use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessageView;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;

#[derive(Debug, Clone)]
pub struct SubmitContactMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessageView, SubmitContactMessageError> {
        Ok(self.repository.save(command.into_message()).await?)
    }
}
