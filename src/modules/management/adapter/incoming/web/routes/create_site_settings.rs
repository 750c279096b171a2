use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::modules::management::adapter::incoming::web::extractors::ManagementUser;
use crate::modules::site_settings::application::ports::incoming::use_cases::{
    CreateSiteSettingsCommand, CreateSiteSettingsError, SiteSettingsDraft,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/management/site-settings/",
    tag = "management",
    request_body = SiteSettingsDraft,
    security(("management_token" = [])),
    responses(
        (status = 201, description = "Settings created", body = crate::modules::site_settings::application::domain::entities::SiteSettingsView),
        (status = 400, description = "Invalid fields", body = crate::shared::api::SubmissionBody),
        (status = 401, description = "Missing or invalid token", body = crate::shared::api::DetailBody),
        (status = 409, description = "Active settings already exist", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/management/site-settings/")]
pub async fn create_site_settings_handler(
    _user: ManagementUser,
    payload: web::Json<SiteSettingsDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateSiteSettingsCommand::new(payload.into_inner()) {
        Ok(command) => command,
        Err(errors) => {
            warn!(operation = "create_site_settings", ?errors, "Rejected site settings");
            return ApiResponse::rejected("Invalid site settings.", Some(errors));
        }
    };

    match data.site_settings.create.execute(command).await {
        Ok(view) => {
            info!(site_title = %view.site_title, "Site settings created");
            ApiResponse::created(view)
        }
        Err(CreateSiteSettingsError::AlreadyExists) => {
            ApiResponse::conflict("Only one active site settings record is allowed.")
        }
        Err(CreateSiteSettingsError::RepositoryError(msg)) => {
            error!(operation = "create_site_settings", error = %msg, "Failed to create site settings");
            ApiResponse::internal_error()
        }
    }
}
