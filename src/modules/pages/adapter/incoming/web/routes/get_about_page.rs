use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::pages::application::ports::incoming::use_cases::GetAboutPageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/about/",
    tag = "pages",
    responses(
        (status = 200, description = "About page aggregate", body = crate::modules::pages::application::domain::entities::AboutPageData),
        (status = 404, description = "No active personal information", body = crate::shared::api::DetailBody),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/about/")]
pub async fn get_about_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.pages.about.execute().await {
        Ok(page) => ApiResponse::success(page),
        Err(GetAboutPageError::NotFound) => ApiResponse::not_found("About page data not found"),
        Err(GetAboutPageError::QueryFailed(msg)) => {
            error!(operation = "get_about_page", error = %msg, "Failed to assemble about page");
            ApiResponse::internal_error()
        }
    }
}
