pub mod newsletter_repository_postgres;
pub mod sea_orm_entity;

pub use newsletter_repository_postgres::NewsletterRepositoryPostgres;
