pub mod testimonials;
