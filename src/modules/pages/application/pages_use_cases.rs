use std::sync::Arc;

use crate::modules::pages::application::ports::incoming::use_cases::{
    GetAboutPageUseCase, GetExperiencePageUseCase, GetHomepageUseCase, GetSkillsPageUseCase,
};

#[derive(Clone)]
pub struct PagesUseCases {
    pub homepage: Arc<dyn GetHomepageUseCase + Send + Sync>,
    pub about: Arc<dyn GetAboutPageUseCase + Send + Sync>,
    pub skills: Arc<dyn GetSkillsPageUseCase + Send + Sync>,
    pub experience: Arc<dyn GetExperiencePageUseCase + Send + Sync>,
}
