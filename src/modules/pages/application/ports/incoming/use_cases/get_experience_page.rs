use async_trait::async_trait;

use crate::modules::pages::application::domain::entities::ExperiencePageData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperiencePageError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetExperiencePageUseCase: Send + Sync {
    async fn execute(&self) -> Result<ExperiencePageData, GetExperiencePageError>;
}
