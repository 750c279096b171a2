use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessageView;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactQuery;

#[derive(Debug, Clone)]
pub struct ListContactMessagesService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListContactMessagesService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListContactMessagesUseCase for ListContactMessagesService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactMessageView>, ListContactMessagesError> {
        Ok(self.query.list_messages().await?)
    }
}
