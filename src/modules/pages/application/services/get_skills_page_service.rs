use async_trait::async_trait;
use futures::TryFutureExt;
use std::sync::Arc;

use crate::modules::pages::application::domain::entities::SkillsPageData;
use crate::modules::pages::application::ports::incoming::use_cases::{
    GetSkillsPageError, GetSkillsPageUseCase,
};
use crate::modules::skill::application::domain::entities::SkillsByCategory;
use crate::modules::skill::application::ports::outgoing::SkillQuery;

#[derive(Clone)]
pub struct GetSkillsPageService {
    skills: Arc<dyn SkillQuery>,
}

impl GetSkillsPageService {
    pub fn new(skills: Arc<dyn SkillQuery>) -> Self {
        Self { skills }
    }
}

fn query_failed(e: impl ToString) -> GetSkillsPageError {
    GetSkillsPageError::QueryFailed(e.to_string())
}

#[async_trait]
impl GetSkillsPageUseCase for GetSkillsPageService {
    async fn execute(&self) -> Result<SkillsPageData, GetSkillsPageError> {
        let (skills, tools) = futures::try_join!(
            self.skills.list_skills(None).map_err(query_failed),
            self.skills.list_tools().map_err(query_failed),
        )?;

        Ok(SkillsPageData {
            skills_by_category: SkillsByCategory::from_skills(skills).without_empty(),
            tools,
        })
    }
}
