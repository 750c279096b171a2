mod get_about_page;
mod get_experience_page;
mod get_homepage;
mod get_skills_page;

pub use get_about_page::{GetAboutPageError, GetAboutPageUseCase};
pub use get_experience_page::{GetExperiencePageError, GetExperiencePageUseCase};
pub use get_homepage::{GetHomepageError, GetHomepageUseCase};
pub use get_skills_page::{GetSkillsPageError, GetSkillsPageUseCase};
