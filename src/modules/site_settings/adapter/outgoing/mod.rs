pub mod sea_orm_entity;
pub mod site_settings_query_postgres;
pub mod site_settings_repository_postgres;

pub use site_settings_query_postgres::SiteSettingsQueryPostgres;
pub use site_settings_repository_postgres::SiteSettingsRepositoryPostgres;
