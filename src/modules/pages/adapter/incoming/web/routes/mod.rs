mod get_about_page;
mod get_experience_page;
mod get_homepage;
mod get_skills_page;

pub use get_about_page::*;
pub use get_experience_page::*;
pub use get_homepage::*;
pub use get_skills_page::*;
