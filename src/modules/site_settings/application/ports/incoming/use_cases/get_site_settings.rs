use async_trait::async_trait;

use crate::modules::site_settings::application::domain::entities::SiteSettingsView;
use crate::modules::site_settings::application::ports::outgoing::SiteSettingsQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSiteSettingsError {
    #[error("Site settings not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SiteSettingsQueryError> for GetSiteSettingsError {
    fn from(err: SiteSettingsQueryError) -> Self {
        match err {
            SiteSettingsQueryError::DatabaseError(msg) => GetSiteSettingsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSiteSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SiteSettingsView, GetSiteSettingsError>;
}
