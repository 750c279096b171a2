mod create_site_settings_service;
mod get_site_settings_service;

pub use create_site_settings_service::CreateSiteSettingsService;
pub use get_site_settings_service::GetSiteSettingsService;
