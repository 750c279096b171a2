use async_trait::async_trait;

use crate::modules::career::application::domain::entities::EducationView;
use crate::modules::career::application::ports::outgoing::CareerQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEducationError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CareerQueryError> for ListEducationError {
    fn from(err: CareerQueryError) -> Self {
        match err {
            CareerQueryError::DatabaseError(msg) => ListEducationError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EducationView>, ListEducationError>;
}
