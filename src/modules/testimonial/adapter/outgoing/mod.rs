pub mod sea_orm_entity;
pub mod testimonial_query_postgres;

pub use testimonial_query_postgres::TestimonialQueryPostgres;
