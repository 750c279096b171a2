use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::ListToolsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/tools/",
    tag = "skills",
    responses(
        (status = 200, description = "Active tools", body = [crate::modules::skill::application::domain::entities::ToolView]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/tools/")]
pub async fn get_tools_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.list_tools.execute().await {
        Ok(tools) => ApiResponse::success(tools),
        Err(ListToolsError::QueryFailed(msg)) => {
            error!(operation = "list_tools", error = %msg, "Failed to list tools");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::modules::skill::application::domain::entities::ToolView;
    use crate::modules::skill::application::ports::incoming::use_cases::ListToolsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct FailingTools;

    #[async_trait]
    impl ListToolsUseCase for FailingTools {
        async fn execute(&self) -> Result<Vec<ToolView>, ListToolsError> {
            Err(ListToolsError::QueryFailed("relation \"tools\" does not exist".into()))
        }
    }

    #[actix_web::test]
    async fn store_failure_is_500_with_generic_detail() {
        let app_state = TestAppStateBuilder::default()
            .with_list_tools(FailingTools)
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(get_tools_handler)).await;

        let req = test::TestRequest::get().uri("/api/tools/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "An unexpected error occurred");
    }
}
