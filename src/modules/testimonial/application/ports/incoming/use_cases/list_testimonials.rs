use async_trait::async_trait;

use crate::modules::testimonial::application::domain::entities::TestimonialView;
use crate::modules::testimonial::application::ports::outgoing::TestimonialQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTestimonialsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<TestimonialQueryError> for ListTestimonialsError {
    fn from(err: TestimonialQueryError) -> Self {
        match err {
            TestimonialQueryError::DatabaseError(msg) => ListTestimonialsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListTestimonialsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TestimonialView>, ListTestimonialsError>;
}
