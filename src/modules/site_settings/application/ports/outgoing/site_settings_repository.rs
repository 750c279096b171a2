use async_trait::async_trait;

use crate::modules::site_settings::application::domain::entities::SiteSettingsView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSiteSettingsData {
    pub site_title: String,
    pub site_description: String,
    pub favicon: Option<String>,
    pub logo: Option<String>,
    pub meta_keywords: String,
    pub google_analytics_id: String,
    pub primary_color: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SiteSettingsRepositoryError {
    #[error("Active site settings already exist")]
    SingletonViolation,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SiteSettingsRepository: Send + Sync {
    /// Inserts settings unless an active row already exists.
    async fn create(
        &self,
        data: CreateSiteSettingsData,
    ) -> Result<SiteSettingsView, SiteSettingsRepositoryError>;
}
