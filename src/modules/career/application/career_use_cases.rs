use std::sync::Arc;

use crate::modules::career::application::ports::incoming::use_cases::{
    ListEducationUseCase, ListExperienceUseCase, ListTimelineUseCase,
};

#[derive(Clone)]
pub struct CareerUseCases {
    pub list_experience: Arc<dyn ListExperienceUseCase + Send + Sync>,
    pub list_education: Arc<dyn ListEducationUseCase + Send + Sync>,
    pub list_timeline: Arc<dyn ListTimelineUseCase + Send + Sync>,
}
