use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    CreatePersonalInfoUseCase, GetCoreExpertiseUseCase, GetPersonalInfoUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_personal_info: Arc<dyn GetPersonalInfoUseCase + Send + Sync>,
    pub get_core_expertise: Arc<dyn GetCoreExpertiseUseCase + Send + Sync>,
    pub create_personal_info: Arc<dyn CreatePersonalInfoUseCase + Send + Sync>,
}
