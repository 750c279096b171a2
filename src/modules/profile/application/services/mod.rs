mod create_personal_info_service;
mod get_core_expertise_service;
mod get_personal_info_service;

pub use create_personal_info_service::CreatePersonalInfoService;
pub use get_core_expertise_service::GetCoreExpertiseService;
pub use get_personal_info_service::GetPersonalInfoService;
