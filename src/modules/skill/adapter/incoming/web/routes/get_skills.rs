use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::skill::application::ports::incoming::use_cases::ListSkillsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SkillListParams {
    /// Category code: frontend, backend, design, mobile, uiux or tools.
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/skills/",
    tag = "skills",
    params(SkillListParams),
    responses(
        (status = 200, description = "Active skills", body = [crate::modules::skill::application::domain::entities::SkillView]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/skills/")]
pub async fn get_skills_handler(
    params: web::Query<SkillListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.list_skills.execute(params.category.as_deref()).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(ListSkillsError::QueryFailed(msg)) => {
            error!(operation = "list_skills", category = ?params.category, error = %msg, "Failed to list skills");
            ApiResponse::internal_error()
        }
    }
}
