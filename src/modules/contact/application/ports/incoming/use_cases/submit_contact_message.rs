use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::contact::application::domain::entities::ContactMessageView;
use crate::modules::contact::application::ports::outgoing::{
    ContactRepositoryError, NewContactMessage,
};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactMessageDraft {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "Project Inquiry")]
    pub subject: String,
    #[schema(example = "I would like to discuss...")]
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SubmitContactMessageCommand {
    message: NewContactMessage,
}

impl SubmitContactMessageCommand {
    pub fn new(draft: ContactMessageDraft) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let message = NewContactMessage {
            name: errors.required_text("name", &draft.name, 100),
            email: errors.required_email("email", &draft.email),
            subject: errors.required_text("subject", &draft.subject, 200),
            message: errors.required_text("message", &draft.message, usize::MAX),
        };

        errors.finish(Self { message })
    }

    pub fn message(&self) -> &NewContactMessage {
        &self.message
    }

    pub fn into_message(self) -> NewContactMessage {
        self.message
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContactRepositoryError> for SubmitContactMessageError {
    fn from(err: ContactRepositoryError) -> Self {
        match err {
            ContactRepositoryError::DatabaseError(msg) => SubmitContactMessageError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessageView, SubmitContactMessageError>;
}
