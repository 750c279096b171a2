use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::ToolView;
use crate::modules::skill::application::ports::incoming::use_cases::{
    ListToolsError, ListToolsUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;

#[derive(Debug, Clone)]
pub struct ListToolsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListToolsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListToolsUseCase for ListToolsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ToolView>, ListToolsError> {
        Ok(self.query.list_tools().await?)
    }
}
