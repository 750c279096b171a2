use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::career::application::ports::incoming::use_cases::ListTimelineError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/timeline/",
    tag = "career",
    responses(
        (status = 200, description = "Active timeline milestones", body = [crate::modules::career::application::domain::entities::TimelineView]),
        (status = 500, description = "Internal server error", body = crate::shared::api::DetailBody)
    )
)]
#[get("/api/timeline/")]
pub async fn get_timeline_handler(data: web::Data<AppState>) -> impl Responder {
    match data.career.list_timeline.execute(None).await {
        Ok(entries) => ApiResponse::success(entries),
        Err(ListTimelineError::QueryFailed(msg)) => {
            error!(operation = "list_timeline", error = %msg, "Failed to list timeline");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::career::application::domain::entities::TimelineView;
    use crate::modules::career::application::ports::incoming::use_cases::ListTimelineUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone, Default)]
    struct RecordingTimeline {
        limits: Arc<Mutex<Vec<Option<u64>>>>,
    }

    #[async_trait]
    impl ListTimelineUseCase for RecordingTimeline {
        async fn execute(&self, limit: Option<u64>) -> Result<Vec<TimelineView>, ListTimelineError> {
            self.limits.lock().unwrap().push(limit);
            Ok(vec![TimelineView {
                id: Uuid::now_v7(),
                year: 2024,
                title: "Joined Acme".into(),
                description: String::new(),
                order: 0,
            }])
        }
    }

    #[actix_web::test]
    async fn returns_full_timeline() {
        let use_case = RecordingTimeline::default();
        let app_state = TestAppStateBuilder::default()
            .with_list_timeline(use_case.clone())
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(get_timeline_handler)).await;

        let req = test::TestRequest::get().uri("/api/timeline/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["year"], 2024);
        assert_eq!(*use_case.limits.lock().unwrap(), vec![None]);
    }
}
