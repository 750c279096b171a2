pub mod domain;
pub mod ports;
pub mod services;
pub mod testimonial_use_cases;
