use std::sync::Arc;

use crate::modules::testimonial::application::ports::incoming::use_cases::ListTestimonialsUseCase;

#[derive(Clone)]
pub struct TestimonialUseCases {
    pub list: Arc<dyn ListTestimonialsUseCase + Send + Sync>,
}
