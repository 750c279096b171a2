use async_trait::async_trait;

use crate::modules::site_settings::application::domain::entities::SiteSettingsView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SiteSettingsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SiteSettingsQuery: Send + Sync {
    async fn find_active(&self) -> Result<Option<SiteSettingsView>, SiteSettingsQueryError>;
}
