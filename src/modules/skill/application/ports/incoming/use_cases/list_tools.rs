use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::ToolView;
use crate::modules::skill::application::ports::outgoing::SkillQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListToolsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for ListToolsError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::DatabaseError(msg) => ListToolsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListToolsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ToolView>, ListToolsError>;
}
