mod testimonial_query;

pub use testimonial_query::{TestimonialQuery, TestimonialQueryError};
