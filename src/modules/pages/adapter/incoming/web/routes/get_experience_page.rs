use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::pages::application::ports::incoming::use_cases::GetExperiencePageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experience-page/",
    tag = "pages",
    responses(
        (status = 200, description = "Experience, education and timeline", body = crate::modules::pages::application::domain::entities::ExperiencePageData),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/experience-page/")]
pub async fn get_experience_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.pages.experience.execute().await {
        Ok(page) => ApiResponse::success(page),
        Err(GetExperiencePageError::QueryFailed(msg)) => {
            error!(operation = "get_experience_page", error = %msg, "Failed to assemble experience page");
            ApiResponse::internal_error()
        }
    }
}
