use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillView;
use crate::modules::skill::application::ports::outgoing::SkillQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSkillsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for ListSkillsError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::DatabaseError(msg) => ListSkillsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    /// `category` is the raw code from the query string; an unknown code
    /// matches nothing.
    async fn execute(&self, category: Option<&str>) -> Result<Vec<SkillView>, ListSkillsError>;
}
