mod create_site_settings;
mod get_site_settings;

pub use create_site_settings::{
    CreateSiteSettingsCommand, CreateSiteSettingsError, CreateSiteSettingsUseCase,
    SiteSettingsDraft,
};
pub use get_site_settings::{GetSiteSettingsError, GetSiteSettingsUseCase};
