mod get_skills_by_category;
mod list_skills;
mod list_tools;

pub use get_skills_by_category::{GetSkillsByCategoryError, GetSkillsByCategoryUseCase};
pub use list_skills::{ListSkillsError, ListSkillsUseCase};
pub use list_tools::{ListToolsError, ListToolsUseCase};
