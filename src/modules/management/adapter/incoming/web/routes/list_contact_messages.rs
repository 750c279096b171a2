use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::contact::application::ports::incoming::use_cases::ListContactMessagesError;
use crate::modules::management::adapter::incoming::web::extractors::ManagementUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/management/contact-messages/",
    tag = "management",
    security(("management_token" = [])),
    responses(
        (status = 200, description = "Inbox, newest first", body = [crate::modules::contact::application::domain::entities::ContactMessageView]),
        (status = 401, description = "Missing or invalid token", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/management/contact-messages/")]
pub async fn list_contact_messages_handler(
    _user: ManagementUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(ListContactMessagesError::QueryFailed(msg)) => {
            error!(operation = "list_contact_messages", error = %msg, "Failed to list contact messages");
            ApiResponse::internal_error()
        }
    }
}
