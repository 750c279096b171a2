use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::profile::application::ports::incoming::use_cases::GetCoreExpertiseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/core-expertise/",
    tag = "profile",
    responses(
        (status = 200, description = "Active core expertise items", body = [crate::modules::profile::application::domain::entities::CoreExpertiseView]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/core-expertise/")]
pub async fn get_core_expertise_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_core_expertise.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(GetCoreExpertiseError::QueryFailed(msg)) => {
            error!(operation = "list_core_expertise", error = %msg, "Failed to load core expertise");
            ApiResponse::internal_error()
        }
    }
}
