pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_profile_tables;
mod m20260301_000002_create_skill_tables;
mod m20260301_000003_create_project_tables;
mod m20260301_000004_create_career_tables;
mod m20260301_000005_create_audience_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_profile_tables::Migration),
            Box::new(m20260301_000002_create_skill_tables::Migration),
            Box::new(m20260301_000003_create_project_tables::Migration),
            Box::new(m20260301_000004_create_career_tables::Migration),
            Box::new(m20260301_000005_create_audience_tables::Migration),
        ]
    }
}
