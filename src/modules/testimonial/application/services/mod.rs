mod list_testimonials_service;

pub use list_testimonials_service::ListTestimonialsService;
