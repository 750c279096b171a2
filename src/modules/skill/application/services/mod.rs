mod get_skills_by_category_service;
mod list_skills_service;
mod list_tools_service;

pub use get_skills_by_category_service::GetSkillsByCategoryService;
pub use list_skills_service::ListSkillsService;
pub use list_tools_service::ListToolsService;
