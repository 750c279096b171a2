use async_trait::async_trait;

use crate::modules::career::application::domain::entities::TimelineView;
use crate::modules::career::application::ports::outgoing::CareerQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTimelineError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CareerQueryError> for ListTimelineError {
    fn from(err: CareerQueryError) -> Self {
        match err {
            CareerQueryError::DatabaseError(msg) => ListTimelineError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListTimelineUseCase: Send + Sync {
    /// `None` returns the whole timeline.
    async fn execute(&self, limit: Option<u64>) -> Result<Vec<TimelineView>, ListTimelineError>;
}
