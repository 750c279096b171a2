mod newsletter_repository;

pub use newsletter_repository::{NewsletterRepository, NewsletterRepositoryError};
