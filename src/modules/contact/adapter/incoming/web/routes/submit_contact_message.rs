use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessageDraft, SubmitContactMessageCommand, SubmitContactMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const CONTACT_ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";

#[utoipa::path(
    post,
    path = "/api/contact/",
    tag = "contact",
    request_body = ContactMessageDraft,
    responses(
        (status = 201, description = "Message stored", body = crate::shared::api::SubmissionBody),
        (status = 400, description = "Invalid fields", body = crate::shared::api::SubmissionBody),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/contact/")]
pub async fn submit_contact_message_handler(
    payload: web::Json<ContactMessageDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SubmitContactMessageCommand::new(payload.into_inner()) {
        Ok(command) => command,
        Err(errors) => {
            warn!(operation = "submit_contact_message", ?errors, "Rejected contact message");
            return ApiResponse::rejected("Invalid contact message.", Some(errors));
        }
    };

    match data.contact.submit.execute(command).await {
        Ok(stored) => {
            info!(message_id = %stored.id, "Contact message received");
            ApiResponse::acknowledged(CONTACT_ACKNOWLEDGEMENT)
        }
        Err(SubmitContactMessageError::RepositoryError(msg)) => {
            error!(operation = "submit_contact_message", error = %msg, "Failed to store contact message");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::contact::application::domain::entities::ContactMessageView;
    use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
    use crate::modules::contact::application::ports::outgoing::NewContactMessage;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone, Default)]
    struct RecordingSubmit {
        stored: Arc<Mutex<Vec<NewContactMessage>>>,
    }

    #[async_trait]
    impl SubmitContactMessageUseCase for RecordingSubmit {
        async fn execute(
            &self,
            command: SubmitContactMessageCommand,
        ) -> Result<ContactMessageView, SubmitContactMessageError> {
            let message = command.into_message();
            self.stored.lock().unwrap().push(message.clone());
            Ok(ContactMessageView {
                id: Uuid::now_v7(),
                name: message.name,
                email: message.email,
                subject: message.subject,
                message: message.message,
                is_read: false,
                created_at: Utc::now(),
            })
        }
    }

    #[actix_web::test]
    async fn valid_message_is_acknowledged() {
        let use_case = RecordingSubmit::default();
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact_message(use_case.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .set_json(json!({
                "name": "John Doe",
                "email": "john@example.com",
                "subject": "Project Inquiry",
                "message": "I would like to discuss..."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], CONTACT_ACKNOWLEDGEMENT);
        assert!(body.get("id").is_none());
        assert_eq!(use_case.stored.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn invalid_message_is_rejected_without_storing() {
        let use_case = RecordingSubmit::default();
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact_message(use_case.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .set_json(json!({ "name": "John", "email": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["errors"]["email"].is_array());
        assert!(body["errors"]["subject"].is_array());
        assert!(body["errors"]["message"].is_array());
        assert!(use_case.stored.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn email_wider_than_the_column_is_a_field_error() {
        let use_case = RecordingSubmit::default();
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact_message(use_case.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact/")
            .set_json(json!({
                "name": "John Doe",
                "email": format!("{}@{}.com", "j".repeat(64), "e".repeat(191)),
                "subject": "Project Inquiry",
                "message": "I would like to discuss..."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["errors"]["email"][0],
            "Ensure this field has no more than 254 characters."
        );
        assert!(use_case.stored.lock().unwrap().is_empty());
    }
}
