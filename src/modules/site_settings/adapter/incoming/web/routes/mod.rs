mod get_site_settings;

pub use get_site_settings::*;
