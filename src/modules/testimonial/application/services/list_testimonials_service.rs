use async_trait::async_trait;

use crate::modules::testimonial::application::domain::entities::TestimonialView;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    ListTestimonialsError, ListTestimonialsUseCase,
};
use crate::modules::testimonial::application::ports::outgoing::TestimonialQuery;

#[derive(Debug, Clone)]
pub struct ListTestimonialsService<Q>
where
    Q: TestimonialQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTestimonialsService<Q>
where
    Q: TestimonialQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTestimonialsUseCase for ListTestimonialsService<Q>
where
    Q: TestimonialQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TestimonialView>, ListTestimonialsError> {
        Ok(self.query.list_testimonials().await?)
    }
}
