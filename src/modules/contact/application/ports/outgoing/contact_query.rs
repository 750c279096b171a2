use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessageView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Every message, newest first.
    async fn list_messages(&self) -> Result<Vec<ContactMessageView>, ContactQueryError>;
}
