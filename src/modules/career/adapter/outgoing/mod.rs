pub mod career_query_postgres;
pub mod sea_orm_entity;

pub use career_query_postgres::CareerQueryPostgres;
