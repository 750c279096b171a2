use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::pages::application::ports::incoming::use_cases::GetSkillsPageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills-page/",
    tag = "pages",
    responses(
        (status = 200, description = "Populated skill categories and tools", body = crate::modules::pages::application::domain::entities::SkillsPageData),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/skills-page/")]
pub async fn get_skills_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.pages.skills.execute().await {
        Ok(page) => ApiResponse::success(page),
        Err(GetSkillsPageError::QueryFailed(msg)) => {
            error!(operation = "get_skills_page", error = %msg, "Failed to assemble skills page");
            ApiResponse::internal_error()
        }
    }
}
