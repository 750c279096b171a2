use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::modules::management::adapter::incoming::web::extractors::ManagementUser;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, ProjectDraft,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/management/projects/",
    tag = "management",
    request_body = ProjectDraft,
    security(("management_token" = [])),
    responses(
        (status = 201, description = "Project created", body = crate::modules::project::application::domain::entities::ProjectDetail),
        (status = 400, description = "Invalid fields", body = crate::shared::api::SubmissionBody),
        (status = 404, description = "Unknown category", body = crate::shared::api::DetailBody),
        (status = 409, description = "Slug already used", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/management/projects/")]
pub async fn create_project_handler(
    _user: ManagementUser,
    payload: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateProjectCommand::new(payload.into_inner()) {
        Ok(command) => command,
        Err(errors) => {
            warn!(operation = "create_project", ?errors, "Rejected project");
            return ApiResponse::rejected("Invalid project.", Some(errors));
        }
    };

    match data.project.create.execute(command).await {
        Ok(detail) => {
            info!(slug = %detail.slug, "Project created");
            ApiResponse::created(detail)
        }
        Err(CreateProjectError::CategoryNotFound) => {
            ApiResponse::not_found("No ProjectCategory matches the given query.")
        }
        Err(CreateProjectError::SlugTaken) => {
            ApiResponse::conflict("A project with this slug already exists.")
        }
        Err(CreateProjectError::RepositoryError(msg)) => {
            error!(operation = "create_project", error = %msg, "Failed to create project");
            ApiResponse::internal_error()
        }
    }
}
