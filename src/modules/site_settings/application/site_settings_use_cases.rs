use std::sync::Arc;

use crate::modules::site_settings::application::ports::incoming::use_cases::{
    CreateSiteSettingsUseCase, GetSiteSettingsUseCase,
};

#[derive(Clone)]
pub struct SiteSettingsUseCases {
    pub get: Arc<dyn GetSiteSettingsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSiteSettingsUseCase + Send + Sync>,
}
