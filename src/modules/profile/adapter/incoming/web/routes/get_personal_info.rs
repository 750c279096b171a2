use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::profile::application::ports::incoming::use_cases::GetPersonalInfoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/personal-info/",
    tag = "profile",
    responses(
        (status = 200, description = "Active profile", body = crate::modules::profile::application::domain::entities::PersonalInfoView),
        (status = 404, description = "No active profile", body = crate::shared::api::DetailBody),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/personal-info/")]
pub async fn get_personal_info_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_personal_info.execute().await {
        Ok(info) => ApiResponse::success(info),
        Err(GetPersonalInfoError::NotFound) => {
            ApiResponse::not_found("Personal information not found")
        }
        Err(GetPersonalInfoError::QueryFailed(msg)) => {
            error!(operation = "get_personal_info", error = %msg, "Failed to load personal info");
            ApiResponse::internal_error()
        }
    }
}
