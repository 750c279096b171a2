use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::newsletter::application::domain::entities::SubscriptionOutcome;
use crate::modules::newsletter::application::ports::outgoing::NewsletterRepositoryError;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubscribeDraft {
    #[schema(example = "john@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeCommand {
    email: String,
}

impl SubscribeCommand {
    pub fn new(draft: SubscribeDraft) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = errors.required_email("email", &draft.email).to_lowercase();

        errors.finish(Self { email })
    }

    /// Trimmed and lowercased.
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeError {
    #[error("You are already subscribed to our newsletter.")]
    AlreadySubscribed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<NewsletterRepositoryError> for SubscribeError {
    fn from(err: NewsletterRepositoryError) -> Self {
        match err {
            NewsletterRepositoryError::AlreadySubscribed => SubscribeError::AlreadySubscribed,
            NewsletterRepositoryError::DatabaseError(msg) => SubscribeError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait SubscribeUseCase: Send + Sync {
    async fn execute(&self, command: SubscribeCommand) -> Result<SubscriptionOutcome, SubscribeError>;
}
