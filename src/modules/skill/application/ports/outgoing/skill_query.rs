use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{SkillCategory, SkillView, ToolView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// Active skills ordered by category code, then `order`, then insertion.
    async fn list_skills(
        &self,
        category: Option<SkillCategory>,
    ) -> Result<Vec<SkillView>, SkillQueryError>;

    async fn list_tools(&self) -> Result<Vec<ToolView>, SkillQueryError>;
}
