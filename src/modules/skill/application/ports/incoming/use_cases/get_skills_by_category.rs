use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillsByCategory;
use crate::modules::skill::application::ports::outgoing::SkillQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsByCategoryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for GetSkillsByCategoryError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::DatabaseError(msg) => GetSkillsByCategoryError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSkillsByCategoryUseCase: Send + Sync {
    /// Every category, including empty ones.
    async fn execute(&self) -> Result<SkillsByCategory, GetSkillsByCategoryError>;
}
