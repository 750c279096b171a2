use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsByCategoryUseCase, ListSkillsUseCase, ListToolsUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list_skills: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub by_category: Arc<dyn GetSkillsByCategoryUseCase + Send + Sync>,
    pub list_tools: Arc<dyn ListToolsUseCase + Send + Sync>,
}
