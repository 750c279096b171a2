use async_trait::async_trait;

use crate::modules::career::application::domain::entities::ExperienceView;
use crate::modules::career::application::ports::outgoing::CareerQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListExperienceError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CareerQueryError> for ListExperienceError {
    fn from(err: CareerQueryError) -> Self {
        match err {
            CareerQueryError::DatabaseError(msg) => ListExperienceError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceView>, ListExperienceError>;
}
