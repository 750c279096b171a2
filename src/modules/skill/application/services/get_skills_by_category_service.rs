use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillsByCategory;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsByCategoryError, GetSkillsByCategoryUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;

#[derive(Debug, Clone)]
pub struct GetSkillsByCategoryService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSkillsByCategoryService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsByCategoryUseCase for GetSkillsByCategoryService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<SkillsByCategory, GetSkillsByCategoryError> {
        let skills = self.query.list_skills(None).await?;
        Ok(SkillsByCategory::from_skills(skills))
    }
}
