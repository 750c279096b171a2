use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessageView;
use crate::modules::contact::application::ports::outgoing::ContactQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactMessagesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ContactQueryError> for ListContactMessagesError {
    fn from(err: ContactQueryError) -> Self {
        match err {
            ContactQueryError::DatabaseError(msg) => ListContactMessagesError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessageView>, ListContactMessagesError>;
}
