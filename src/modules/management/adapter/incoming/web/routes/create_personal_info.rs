use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::modules::management::adapter::incoming::web::extractors::ManagementUser;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreatePersonalInfoCommand, CreatePersonalInfoError, PersonalInfoDraft,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/management/personal-info/",
    tag = "management",
    request_body = PersonalInfoDraft,
    security(("management_token" = [])),
    responses(
        (status = 201, description = "Profile created", body = crate::modules::profile::application::domain::entities::PersonalInfoView),
        (status = 400, description = "Invalid fields", body = crate::shared::api::SubmissionBody),
        (status = 401, description = "Missing or invalid token", body = crate::shared::api::DetailBody),
        (status = 409, description = "An active profile already exists", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/management/personal-info/")]
pub async fn create_personal_info_handler(
    _user: ManagementUser,
    payload: web::Json<PersonalInfoDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreatePersonalInfoCommand::new(payload.into_inner()) {
        Ok(command) => command,
        Err(errors) => {
            warn!(operation = "create_personal_info", ?errors, "Rejected personal info");
            return ApiResponse::rejected("Invalid personal information.", Some(errors));
        }
    };

    match data.profile.create_personal_info.execute(command).await {
        Ok(view) => {
            info!(name = %view.name, "Personal information created");
            ApiResponse::created(view)
        }
        Err(CreatePersonalInfoError::AlreadyExists) => {
            warn!(operation = "create_personal_info", "Active personal information already exists");
            ApiResponse::conflict("Only one active personal information record is allowed.")
        }
        Err(CreatePersonalInfoError::RepositoryError(msg)) => {
            error!(operation = "create_personal_info", error = %msg, "Failed to create personal info");
            ApiResponse::internal_error()
        }
    }
}
