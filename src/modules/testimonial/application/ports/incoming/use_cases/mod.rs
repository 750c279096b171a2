mod list_testimonials;

pub use list_testimonials::{ListTestimonialsError, ListTestimonialsUseCase};
