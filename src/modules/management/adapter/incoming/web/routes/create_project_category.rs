use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::modules::management::adapter::incoming::web::extractors::ManagementUser;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCategoryCommand, CreateProjectCategoryError, ProjectCategoryDraft,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/management/project-categories/",
    tag = "management",
    request_body = ProjectCategoryDraft,
    security(("management_token" = [])),
    responses(
        (status = 201, description = "Category created", body = crate::modules::project::application::domain::entities::ProjectCategoryView),
        (status = 400, description = "Invalid fields", body = crate::shared::api::SubmissionBody),
        (status = 409, description = "Slug already used", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/management/project-categories/")]
pub async fn create_project_category_handler(
    _user: ManagementUser,
    payload: web::Json<ProjectCategoryDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateProjectCategoryCommand::new(payload.into_inner()) {
        Ok(command) => command,
        Err(errors) => {
            warn!(operation = "create_project_category", ?errors, "Rejected category");
            return ApiResponse::rejected("Invalid project category.", Some(errors));
        }
    };

    match data.project.create_category.execute(command).await {
        Ok(view) => {
            info!(slug = %view.slug, "Project category created");
            ApiResponse::created(view)
        }
        Err(CreateProjectCategoryError::SlugTaken) => {
            ApiResponse::conflict("A project category with this slug already exists.")
        }
        Err(CreateProjectCategoryError::RepositoryError(msg)) => {
            error!(operation = "create_project_category", error = %msg, "Failed to create category");
            ApiResponse::internal_error()
        }
    }
}
