use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::site_settings::application::ports::incoming::use_cases::GetSiteSettingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/site-settings/",
    tag = "site",
    responses(
        (status = 200, description = "Active site settings", body = crate::modules::site_settings::application::domain::entities::SiteSettingsView),
        (status = 404, description = "No active settings", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/site-settings/")]
pub async fn get_site_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.site_settings.get.execute().await {
        Ok(settings) => ApiResponse::success(settings),
        Err(GetSiteSettingsError::NotFound) => ApiResponse::not_found("Site settings not found"),
        Err(GetSiteSettingsError::QueryFailed(msg)) => {
            error!(operation = "get_site_settings", error = %msg, "Failed to load site settings");
            ApiResponse::internal_error()
        }
    }
}
