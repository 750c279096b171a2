use async_trait::async_trait;

use crate::modules::testimonial::application::domain::entities::TestimonialView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TestimonialQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TestimonialQuery: Send + Sync {
    /// Active testimonials by `order`, newest first within the same order.
    async fn list_testimonials(&self) -> Result<Vec<TestimonialView>, TestimonialQueryError>;
}
