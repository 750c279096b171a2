pub mod core_expertise;
pub mod personal_info;
