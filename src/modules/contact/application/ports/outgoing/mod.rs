mod contact_query;
mod contact_repository;

pub use contact_query::{ContactQuery, ContactQueryError};
pub use contact_repository::{ContactRepository, ContactRepositoryError, NewContactMessage};
