use async_trait::async_trait;

use crate::modules::site_settings::application::domain::entities::SiteSettingsView;
use crate::modules::site_settings::application::ports::incoming::use_cases::{
    GetSiteSettingsError, GetSiteSettingsUseCase,
};
use crate::modules::site_settings::application::ports::outgoing::SiteSettingsQuery;

#[derive(Debug, Clone)]
pub struct GetSiteSettingsService<Q>
where
    Q: SiteSettingsQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSiteSettingsService<Q>
where
    Q: SiteSettingsQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSiteSettingsUseCase for GetSiteSettingsService<Q>
where
    Q: SiteSettingsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<SiteSettingsView, GetSiteSettingsError> {
        self.query
            .find_active()
            .await?
            .ok_or(GetSiteSettingsError::NotFound)
    }
}
