mod list_education_service;
mod list_experience_service;
mod list_timeline_service;

pub use list_education_service::ListEducationService;
pub use list_experience_service::ListExperienceService;
pub use list_timeline_service::ListTimelineService;
