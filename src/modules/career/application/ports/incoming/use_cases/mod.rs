mod list_education;
mod list_experience;
mod list_timeline;

pub use list_education::{ListEducationError, ListEducationUseCase};
pub use list_experience::{ListExperienceError, ListExperienceUseCase};
pub use list_timeline::{ListTimelineError, ListTimelineUseCase};
