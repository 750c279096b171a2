mod apply_project_action;
mod create_project;
mod create_project_category;
mod get_project;
mod list_project_categories;
mod list_projects;

pub use apply_project_action::{ApplyProjectActionError, ApplyProjectActionUseCase};
pub use create_project::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase, ProjectDraft};
pub use create_project_category::{
    CreateProjectCategoryCommand, CreateProjectCategoryError, CreateProjectCategoryUseCase,
    ProjectCategoryDraft,
};
pub use get_project::{GetProjectError, GetProjectUseCase};
pub use list_project_categories::{ListProjectCategoriesError, ListProjectCategoriesUseCase};
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
