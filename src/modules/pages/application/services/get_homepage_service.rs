use async_trait::async_trait;
use futures::TryFutureExt;
use std::sync::Arc;

use crate::modules::career::application::ports::outgoing::CareerQuery;
use crate::modules::pages::application::domain::entities::HomepageData;
use crate::modules::pages::application::ports::incoming::use_cases::{
    GetHomepageError, GetHomepageUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;
use crate::modules::project::application::domain::entities::ProjectFilter;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub const HOMEPAGE_FEATURED_LIMIT: u64 = 6;
pub const HOMEPAGE_TIMELINE_LIMIT: u64 = 5;

#[derive(Clone)]
pub struct GetHomepageService {
    profile: Arc<dyn ProfileQuery>,
    projects: Arc<dyn ProjectQuery>,
    career: Arc<dyn CareerQuery>,
}

impl GetHomepageService {
    pub fn new(
        profile: Arc<dyn ProfileQuery>,
        projects: Arc<dyn ProjectQuery>,
        career: Arc<dyn CareerQuery>,
    ) -> Self {
        Self {
            profile,
            projects,
            career,
        }
    }
}

fn query_failed(e: impl ToString) -> GetHomepageError {
    GetHomepageError::QueryFailed(e.to_string())
}

#[async_trait]
impl GetHomepageUseCase for GetHomepageService {
    async fn execute(&self) -> Result<HomepageData, GetHomepageError> {
        let featured = ProjectFilter::featured(HOMEPAGE_FEATURED_LIMIT);

        let (personal_info, core_expertise, featured_projects, timeline) = futures::try_join!(
            self.profile.find_active_personal_info().map_err(query_failed),
            self.profile.list_core_expertise().map_err(query_failed),
            self.projects.list_projects(&featured).map_err(query_failed),
            self.career
                .list_timeline(Some(HOMEPAGE_TIMELINE_LIMIT))
                .map_err(query_failed),
        )?;

        let personal_info = personal_info.ok_or(GetHomepageError::NotFound)?;

        Ok(HomepageData {
            stats: personal_info.stats(),
            personal_info,
            core_expertise,
            featured_projects,
            timeline,
        })
    }
}
