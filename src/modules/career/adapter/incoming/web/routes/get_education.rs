use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::career::application::ports::incoming::use_cases::ListEducationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/education/",
    tag = "career",
    responses(
        (status = 200, description = "Active education entries", body = [crate::modules::career::application::domain::entities::EducationView]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/education/")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.career.list_education.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(ListEducationError::QueryFailed(msg)) => {
            error!(operation = "list_education", error = %msg, "Failed to list education");
            ApiResponse::internal_error()
        }
    }
}
