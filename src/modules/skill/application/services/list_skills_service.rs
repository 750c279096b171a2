use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{SkillCategory, SkillView};
use crate::modules::skill::application::ports::incoming::use_cases::{
    ListSkillsError, ListSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;

#[derive(Debug, Clone)]
pub struct ListSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSkillsUseCase for ListSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, category: Option<&str>) -> Result<Vec<SkillView>, ListSkillsError> {
        let filter = match category.map(str::trim).filter(|c| !c.is_empty()) {
            None => None,
            Some(code) => match SkillCategory::from_code(code) {
                Some(category) => Some(category),
                None => return Ok(Vec::new()),
            },
        };

        Ok(self.query.list_skills(filter).await?)
    }
}
