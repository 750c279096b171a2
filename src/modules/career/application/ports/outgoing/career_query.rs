use async_trait::async_trait;

use crate::modules::career::application::domain::entities::{
    EducationView, ExperienceView, TimelineView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CareerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CareerQuery: Send + Sync {
    /// Active entries, newest start date first, achievements nested in `order`.
    async fn list_experience(&self) -> Result<Vec<ExperienceView>, CareerQueryError>;

    async fn list_education(&self) -> Result<Vec<EducationView>, CareerQueryError>;

    /// Active milestones, newest year first. `limit` keeps only the leading rows.
    async fn list_timeline(&self, limit: Option<u64>) -> Result<Vec<TimelineView>, CareerQueryError>;
}
