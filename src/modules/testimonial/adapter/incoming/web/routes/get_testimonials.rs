use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::testimonial::application::ports::incoming::use_cases::ListTestimonialsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/testimonials/",
    tag = "testimonials",
    responses(
        (status = 200, description = "Active testimonials", body = [crate::modules::testimonial::application::domain::entities::TestimonialView]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/testimonials/")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    match data.testimonial.list.execute().await {
        Ok(testimonials) => ApiResponse::success(testimonials),
        Err(ListTestimonialsError::QueryFailed(msg)) => {
            error!(operation = "list_testimonials", error = %msg, "Failed to list testimonials");
            ApiResponse::internal_error()
        }
    }
}
