use async_trait::async_trait;

use crate::modules::pages::application::domain::entities::AboutPageData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAboutPageError {
    #[error("No active personal information")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetAboutPageUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutPageData, GetAboutPageError>;
}
