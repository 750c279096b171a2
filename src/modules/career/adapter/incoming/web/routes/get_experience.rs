use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::career::application::ports::incoming::use_cases::ListExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experience/",
    tag = "career",
    responses(
        (status = 200, description = "Active experience entries with achievements", body = [crate::modules::career::application::domain::entities::ExperienceView]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/experience/")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.career.list_experience.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(ListExperienceError::QueryFailed(msg)) => {
            error!(operation = "list_experience", error = %msg, "Failed to list experience");
            ApiResponse::internal_error()
        }
    }
}
