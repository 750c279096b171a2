use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::ListProjectCategoriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/project-categories/",
    tag = "projects",
    responses(
        (status = 200, description = "Active categories with active project counts", body = [crate::modules::project::application::domain::entities::ProjectCategoryView]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/project-categories/")]
pub async fn get_project_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list_categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(ListProjectCategoriesError::QueryFailed(msg)) => {
            error!(operation = "list_project_categories", error = %msg, "Failed to list project categories");
            ApiResponse::internal_error()
        }
    }
}
