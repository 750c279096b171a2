use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsByCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills/by_category/",
    tag = "skills",
    responses(
        (status = 200, description = "Skills grouped per category code, every category present",
            body = std::collections::HashMap<String, crate::modules::skill::application::domain::entities::SkillGroupSchema>),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/skills/by_category/")]
pub async fn get_skills_by_category_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.by_category.execute().await {
        Ok(grouped) => ApiResponse::success(grouped),
        Err(GetSkillsByCategoryError::QueryFailed(msg)) => {
            error!(operation = "skills_by_category", error = %msg, "Failed to group skills");
            ApiResponse::internal_error()
        }
    }
}
