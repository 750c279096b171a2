use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    ApplyProjectActionUseCase, CreateProjectCategoryUseCase, CreateProjectUseCase,
    GetProjectUseCase, ListProjectCategoriesUseCase, ListProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list_categories: Arc<dyn ListProjectCategoriesUseCase + Send + Sync>,
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetProjectUseCase + Send + Sync>,
    pub create_category: Arc<dyn CreateProjectCategoryUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub apply_action: Arc<dyn ApplyProjectActionUseCase + Send + Sync>,
}
