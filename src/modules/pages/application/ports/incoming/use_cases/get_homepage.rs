use async_trait::async_trait;

use crate::modules::pages::application::domain::entities::HomepageData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetHomepageError {
    #[error("No active personal information")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetHomepageUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomepageData, GetHomepageError>;
}
