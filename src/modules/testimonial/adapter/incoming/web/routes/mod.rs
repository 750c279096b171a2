mod get_testimonials;

pub use get_testimonials::*;
