use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::project::application::domain::entities::ProjectFilter;
use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProjectListParams {
    /// Category slug.
    pub category: Option<String>,
    /// Only `true` (any case) filters; other values are ignored.
    pub featured: Option<String>,
    /// Case-insensitive text matched against title, short description and technologies.
    pub search: Option<String>,
}

impl ProjectListParams {
    pub fn into_filter(self) -> ProjectFilter {
        ProjectFilter {
            category_slug: self.category,
            featured_only: self
                .featured
                .as_deref()
                .is_some_and(|v| v.eq_ignore_ascii_case("true")),
            search: self.search,
            limit: None,
        }
    }
}

pub(super) async fn respond_with_projects(data: &AppState, filter: ProjectFilter) -> actix_web::HttpResponse {
    match data.project.list.execute(filter).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(ListProjectsError::QueryFailed(msg)) => {
            error!(operation = "list_projects", error = %msg, "Failed to list projects");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/projects/",
    tag = "projects",
    params(ProjectListParams),
    responses(
        (status = 200, description = "Active projects", body = [crate::modules::project::application::domain::entities::ProjectListItem]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/projects/")]
pub async fn get_projects_handler(
    params: web::Query<ProjectListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond_with_projects(&data, params.into_inner().into_filter()).await
}
