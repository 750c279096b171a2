use async_trait::async_trait;

use crate::modules::site_settings::application::domain::entities::SiteSettingsView;
use crate::modules::site_settings::application::ports::incoming::use_cases::{
    CreateSiteSettingsCommand, CreateSiteSettingsError, CreateSiteSettingsUseCase,
};
use crate::modules::site_settings::application::ports::outgoing::{
    SiteSettingsRepository, SiteSettingsRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateSiteSettingsService<R>
where
    R: SiteSettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateSiteSettingsService<R>
where
    R: SiteSettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSiteSettingsUseCase for CreateSiteSettingsService<R>
where
    R: SiteSettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateSiteSettingsCommand,
    ) -> Result<SiteSettingsView, CreateSiteSettingsError> {
        self.repository
            .create(command.into_data())
            .await
            .map_err(|e| match e {
                SiteSettingsRepositoryError::SingletonViolation => {
                    CreateSiteSettingsError::AlreadyExists
                }
                other => CreateSiteSettingsError::RepositoryError(other.to_string()),
            })
    }
}
