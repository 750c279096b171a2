use async_trait::async_trait;
use futures::TryFutureExt;
use std::sync::Arc;

use crate::modules::career::application::ports::outgoing::CareerQuery;
use crate::modules::pages::application::domain::entities::ExperiencePageData;
use crate::modules::pages::application::ports::incoming::use_cases::{
    GetExperiencePageError, GetExperiencePageUseCase,
};

#[derive(Clone)]
pub struct GetExperiencePageService {
    career: Arc<dyn CareerQuery>,
}

impl GetExperiencePageService {
    pub fn new(career: Arc<dyn CareerQuery>) -> Self {
        Self { career }
    }
}

fn query_failed(e: impl ToString) -> GetExperiencePageError {
    GetExperiencePageError::QueryFailed(e.to_string())
}

#[async_trait]
impl GetExperiencePageUseCase for GetExperiencePageService {
    async fn execute(&self) -> Result<ExperiencePageData, GetExperiencePageError> {
        let (experience, education, timeline) = futures::try_join!(
            self.career.list_experience().map_err(query_failed),
            self.career.list_education().map_err(query_failed),
            self.career.list_timeline(None).map_err(query_failed),
        )?;

        Ok(ExperiencePageData {
            experience,
            education,
            timeline,
        })
    }
}
