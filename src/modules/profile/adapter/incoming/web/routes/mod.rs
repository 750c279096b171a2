mod get_core_expertise;
mod get_personal_info;

pub use get_core_expertise::*;
pub use get_personal_info::*;
