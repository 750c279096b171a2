use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::modules::newsletter::application::ports::incoming::use_cases::{
    SubscribeCommand, SubscribeDraft, SubscribeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const SUBSCRIBED_MESSAGE: &str = "Successfully subscribed to the newsletter!";
pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "You are already subscribed to our newsletter.";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address.";

#[utoipa::path(
    post,
    path = "/api/newsletter/subscribe/",
    tag = "newsletter",
    request_body = SubscribeDraft,
    responses(
        (status = 201, description = "Subscribed or reactivated", body = crate::shared::api::SubmissionBody),
        (status = 400, description = "Invalid email or already subscribed", body = crate::shared::api::SubmissionBody),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/newsletter/subscribe/")]
pub async fn subscribe_handler(
    payload: web::Json<SubscribeDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SubscribeCommand::new(payload.into_inner()) {
        Ok(command) => command,
        Err(errors) => {
            warn!(operation = "newsletter_subscribe", ?errors, "Rejected newsletter email");
            return ApiResponse::rejected(INVALID_EMAIL_MESSAGE, Some(errors));
        }
    };

    match data.newsletter.subscribe.execute(command).await {
        Ok(_) => ApiResponse::acknowledged(SUBSCRIBED_MESSAGE),
        Err(SubscribeError::AlreadySubscribed) => {
            warn!(operation = "newsletter_subscribe", "Email already subscribed");
            ApiResponse::rejected(ALREADY_SUBSCRIBED_MESSAGE, None)
        }
        Err(SubscribeError::RepositoryError(msg)) => {
            error!(operation = "newsletter_subscribe", error = %msg, "Failed to store subscription");
            ApiResponse::internal_error()
        }
    }
}
