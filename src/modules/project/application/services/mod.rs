mod apply_project_action_service;
mod create_project_category_service;
mod create_project_service;
mod get_project_service;
mod list_project_categories_service;
mod list_projects_service;

pub use apply_project_action_service::ApplyProjectActionService;
pub use create_project_category_service::CreateProjectCategoryService;
pub use create_project_service::CreateProjectService;
pub use get_project_service::GetProjectService;
pub use list_project_categories_service::ListProjectCategoriesService;
pub use list_projects_service::ListProjectsService;
