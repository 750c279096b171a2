use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessageView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores the message unread. No deduplication.
    async fn save(&self, message: NewContactMessage) -> Result<ContactMessageView, ContactRepositoryError>;

    /// Returns the number of rows changed.
    async fn set_read(&self, ids: &[Uuid], is_read: bool) -> Result<u64, ContactRepositoryError>;
}
