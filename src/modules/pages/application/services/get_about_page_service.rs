use async_trait::async_trait;
use futures::TryFutureExt;
use std::sync::Arc;

use crate::modules::career::application::ports::outgoing::CareerQuery;
use crate::modules::pages::application::domain::entities::AboutPageData;
use crate::modules::pages::application::ports::incoming::use_cases::{
    GetAboutPageError, GetAboutPageUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

#[derive(Clone)]
pub struct GetAboutPageService {
    profile: Arc<dyn ProfileQuery>,
    career: Arc<dyn CareerQuery>,
}

impl GetAboutPageService {
    pub fn new(profile: Arc<dyn ProfileQuery>, career: Arc<dyn CareerQuery>) -> Self {
        Self { profile, career }
    }
}

fn query_failed(e: impl ToString) -> GetAboutPageError {
    GetAboutPageError::QueryFailed(e.to_string())
}

#[async_trait]
impl GetAboutPageUseCase for GetAboutPageService {
    async fn execute(&self) -> Result<AboutPageData, GetAboutPageError> {
        let (personal_info, core_expertise, timeline) = futures::try_join!(
            self.profile.find_active_personal_info().map_err(query_failed),
            self.profile.list_core_expertise().map_err(query_failed),
            self.career.list_timeline(None).map_err(query_failed),
        )?;

        let personal_info = personal_info.ok_or(GetAboutPageError::NotFound)?;

        Ok(AboutPageData {
            stats: personal_info.stats(),
            personal_info,
            core_expertise,
            timeline,
        })
    }
}
