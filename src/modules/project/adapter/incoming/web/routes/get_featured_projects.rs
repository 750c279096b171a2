use actix_web::{get, web, Responder};

use super::get_projects::{respond_with_projects, ProjectListParams};
use crate::AppState;

/// Same as `/api/projects/?featured=true`; other list filters still apply.
#[utoipa::path(
    get,
    path = "/api/projects/featured/",
    tag = "projects",
    params(ProjectListParams),
    responses(
        (status = 200, description = "Featured active projects", body = [crate::modules::project::application::domain::entities::ProjectListItem]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/projects/featured/")]
pub async fn get_featured_projects_handler(
    params: web::Query<ProjectListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut filter = params.into_inner().into_filter();
    filter.featured_only = true;

    respond_with_projects(&data, filter).await
}
