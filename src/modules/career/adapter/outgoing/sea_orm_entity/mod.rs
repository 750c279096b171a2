pub mod achievements;
pub mod education;
pub mod experiences;
pub mod timeline;
