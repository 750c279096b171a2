use actix_web::{post, web, Responder};
use tracing::{error, info};

use super::{ActionResult, ContactMessageActionRequest};
use crate::modules::contact::application::ports::incoming::use_cases::ApplyContactMessageActionError;
use crate::modules::management::adapter::incoming::web::extractors::ManagementUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/management/contact-messages/actions/",
    tag = "management",
    request_body = ContactMessageActionRequest,
    security(("management_token" = [])),
    responses(
        (status = 200, description = "Action applied", body = ActionResult),
        (status = 401, description = "Missing or invalid token", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/management/contact-messages/actions/")]
pub async fn apply_contact_message_action_handler(
    _user: ManagementUser,
    payload: web::Json<ContactMessageActionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ContactMessageActionRequest { action, ids } = payload.into_inner();

    match data.contact.apply_action.execute(action, ids).await {
        Ok(updated) => {
            info!(?action, updated, "Contact message action applied");
            ApiResponse::success(ActionResult { updated })
        }
        Err(ApplyContactMessageActionError::RepositoryError(msg)) => {
            error!(operation = "apply_contact_message_action", error = %msg, "Failed to update messages");
            ApiResponse::internal_error()
        }
    }
}
