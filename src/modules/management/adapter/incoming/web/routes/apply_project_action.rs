use actix_web::{post, web, Responder};
use tracing::{error, info};

use super::{ActionResult, ProjectActionRequest};
use crate::modules::management::adapter::incoming::web::extractors::ManagementUser;
use crate::modules::project::application::ports::incoming::use_cases::ApplyProjectActionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/management/projects/actions/",
    tag = "management",
    request_body = ProjectActionRequest,
    security(("management_token" = [])),
    responses(
        (status = 200, description = "Action applied", body = ActionResult),
        (status = 401, description = "Missing or invalid token", body = crate::shared::api::DetailBody)
    )
)]
#[post("/api/management/projects/actions/")]
pub async fn apply_project_action_handler(
    _user: ManagementUser,
    payload: web::Json<ProjectActionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ProjectActionRequest { action, ids } = payload.into_inner();

    match data.project.apply_action.execute(action, ids).await {
        Ok(updated) => {
            info!(?action, updated, "Project action applied");
            ApiResponse::success(ActionResult { updated })
        }
        Err(ApplyProjectActionError::RepositoryError(msg)) => {
            error!(operation = "apply_project_action", error = %msg, "Failed to apply project action");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::modules::management::application::domain::management_token::ManagementToken;
    use crate::modules::project::application::domain::entities::ProjectAction;
    use crate::modules::project::application::ports::incoming::use_cases::ApplyProjectActionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct CountIfFeatured;

    #[async_trait]
    impl ApplyProjectActionUseCase for CountIfFeatured {
        async fn execute(
            &self,
            action: ProjectAction,
            ids: Vec<Uuid>,
        ) -> Result<u64, ApplyProjectActionError> {
            match action {
                ProjectAction::MarkFeatured => Ok(ids.len() as u64),
                _ => Ok(0),
            }
        }
    }

    #[actix_web::test]
    async fn reports_updated_count() {
        let app_state = TestAppStateBuilder::default()
            .with_apply_project_action(CountIfFeatured)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(ManagementToken::from_secret("t")))
                .service(apply_project_action_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/management/projects/actions/")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(json!({
                "action": "mark_featured",
                "ids": [Uuid::now_v7(), Uuid::now_v7()]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["updated"], 2);
    }

    #[actix_web::test]
    async fn unknown_action_is_rejected_by_the_json_layer() {
        let app_state = TestAppStateBuilder::default()
            .with_apply_project_action(CountIfFeatured)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(ManagementToken::from_secret("t")))
                .service(apply_project_action_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/management/projects/actions/")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(json!({ "action": "archive", "ids": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
