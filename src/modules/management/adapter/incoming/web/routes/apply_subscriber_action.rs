use actix_web::{post, web, Responder};
use tracing::{error, info};

use super::{ActionResult, SubscriberActionRequest};
use crate::modules::management::adapter::incoming::web::extractors::ManagementUser;
use crate::modules::newsletter::application::ports::incoming::use_cases::ApplySubscriberActionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/management/newsletter-subscribers/actions/",
    tag = "management",
    request_body = SubscriberActionRequest,
    security(("management_token" = [])),
    responses(
        (status = 200, description = "Action applied", body = ActionResult),
        (status = 401, description = "Missing or invalid token", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/management/newsletter-subscribers/actions/")]
pub async fn apply_subscriber_action_handler(
    _user: ManagementUser,
    payload: web::Json<SubscriberActionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let SubscriberActionRequest { action, ids } = payload.into_inner();

    match data.newsletter.apply_action.execute(action, ids).await {
        Ok(updated) => {
            info!(?action, updated, "Subscriber action applied");
            ApiResponse::success(ActionResult { updated })
        }
        Err(ApplySubscriberActionError::RepositoryError(msg)) => {
            error!(operation = "apply_subscriber_action", error = %msg, "Failed to update subscribers");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use uuid::Uuid;

    use crate::modules::management::application::domain::management_token::ManagementToken;
    use crate::modules::newsletter::application::domain::entities::SubscriberAction;
    use crate::modules::newsletter::application::ports::incoming::use_cases::ApplySubscriberActionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct Broken;

    #[async_trait]
    impl ApplySubscriberActionUseCase for Broken {
        async fn execute(
            &self,
            _action: SubscriberAction,
            _ids: Vec<Uuid>,
        ) -> Result<u64, ApplySubscriberActionError> {
            Err(ApplySubscriberActionError::RepositoryError("pool timed out".into()))
        }
    }

    #[actix_web::test]
    async fn store_failure_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_apply_subscriber_action(Broken)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(ManagementToken::from_secret("t")))
                .service(apply_subscriber_action_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/management/newsletter-subscribers/actions/")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(json!({ "action": "deactivate", "ids": [Uuid::now_v7()] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
