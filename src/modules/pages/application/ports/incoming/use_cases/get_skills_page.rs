use async_trait::async_trait;

use crate::modules::pages::application::domain::entities::SkillsPageData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsPageError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSkillsPageUseCase: Send + Sync {
    async fn execute(&self) -> Result<SkillsPageData, GetSkillsPageError>;
}
