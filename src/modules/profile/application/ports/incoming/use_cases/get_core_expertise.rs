use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::CoreExpertiseView;
use crate::modules::profile::application::ports::outgoing::ProfileQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCoreExpertiseError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProfileQueryError> for GetCoreExpertiseError {
    fn from(err: ProfileQueryError) -> Self {
        match err {
            ProfileQueryError::DatabaseError(msg) => GetCoreExpertiseError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetCoreExpertiseUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CoreExpertiseView>, GetCoreExpertiseError>;
}
