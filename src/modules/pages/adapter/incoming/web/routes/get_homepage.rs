use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::pages::application::ports::incoming::use_cases::GetHomepageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Everything the landing page renders in one round trip.
#[utoipa::path(
    get,
    path = "/api/homepage/",
    tag = "pages",
    responses(
        (status = 200, description = "Homepage aggregate", body = crate::modules::pages::application::domain::entities::HomepageData),
        (status = 404, description = "No active personal information", body = crate::shared::api::DetailBody),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/homepage/")]
pub async fn get_homepage_handler(data: web::Data<AppState>) -> impl Responder {
    match data.pages.homepage.execute().await {
        Ok(page) => ApiResponse::success(page),
        Err(GetHomepageError::NotFound) => ApiResponse::not_found("Homepage data not found"),
        Err(GetHomepageError::QueryFailed(msg)) => {
            error!(operation = "get_homepage", error = %msg, "Failed to assemble homepage");
            ApiResponse::internal_error()
        }
    }
}
