mod get_about_page_service;
mod get_experience_page_service;
mod get_homepage_service;
mod get_skills_page_service;

pub use get_about_page_service::GetAboutPageService;
pub use get_experience_page_service::GetExperiencePageService;
pub use get_homepage_service::{GetHomepageService, HOMEPAGE_FEATURED_LIMIT, HOMEPAGE_TIMELINE_LIMIT};
pub use get_skills_page_service::GetSkillsPageService;
