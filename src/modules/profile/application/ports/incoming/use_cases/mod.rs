mod create_personal_info;
mod get_core_expertise;
mod get_personal_info;

pub use create_personal_info::{
    CreatePersonalInfoCommand, CreatePersonalInfoError, CreatePersonalInfoUseCase,
    PersonalInfoDraft,
};
pub use get_core_expertise::{GetCoreExpertiseError, GetCoreExpertiseUseCase};
pub use get_personal_info::{GetPersonalInfoError, GetPersonalInfoUseCase};
