mod get_education;
mod get_experience;
mod get_timeline;

pub use get_education::*;
pub use get_experience::*;
pub use get_timeline::*;
