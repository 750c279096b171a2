pub mod domain;
pub mod ports;
pub mod services;
pub mod site_settings_use_cases;
