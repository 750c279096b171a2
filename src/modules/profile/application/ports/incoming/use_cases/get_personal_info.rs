use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfoView;
use crate::modules::profile::application::ports::outgoing::ProfileQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPersonalInfoError {
    #[error("Personal information not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProfileQueryError> for GetPersonalInfoError {
    fn from(err: ProfileQueryError) -> Self {
        match err {
            ProfileQueryError::DatabaseError(msg) => GetPersonalInfoError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetPersonalInfoUseCase: Send + Sync {
    async fn execute(&self) -> Result<PersonalInfoView, GetPersonalInfoError>;
}
