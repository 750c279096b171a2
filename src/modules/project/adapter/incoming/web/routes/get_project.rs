use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{slug}/",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project detail", body = crate::modules::project::application::domain::entities::ProjectDetail),
        (status = 404, description = "No active project with this slug", body = crate::shared::api::DetailBody),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/projects/{slug}/")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get_by_slug.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetProjectError::NotFound) => ApiResponse::not_found("No Project matches the given query."),
        Err(GetProjectError::QueryFailed(msg)) => {
            error!(operation = "get_project", slug = %slug, error = %msg, "Failed to load project");
            ApiResponse::internal_error()
        }
    }
}
