mod site_settings_query;
mod site_settings_repository;

pub use site_settings_query::{SiteSettingsQuery, SiteSettingsQueryError};
pub use site_settings_repository::{
    CreateSiteSettingsData, SiteSettingsRepository, SiteSettingsRepositoryError,
};
