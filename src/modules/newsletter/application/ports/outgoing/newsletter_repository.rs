use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::newsletter::application::domain::entities::Subscriber;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsletterRepositoryError {
    #[error("Email is already subscribed")]
    AlreadySubscribed,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, NewsletterRepositoryError>;

    /// Inserts an active row. A clash on the unique email is `AlreadySubscribed`.
    async fn create(&self, email: &str) -> Result<Subscriber, NewsletterRepositoryError>;

    /// Flips an inactive row back on. `false` when the row was already active.
    async fn reactivate(&self, id: Uuid) -> Result<bool, NewsletterRepositoryError>;

    async fn set_active(&self, ids: &[Uuid], is_active: bool) -> Result<u64, NewsletterRepositoryError>;
}
