use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfoView;

/// Validated input for a new profile row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePersonalInfoData {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub hero_description: String,
    pub about_heading: String,
    pub about_description: String,
    pub about_detail: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability_status: String,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub awards_won: i32,
    pub happy_clients: i32,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub dribbble_url: Option<String>,
    pub resume_pdf: Option<String>,
    pub footer_tagline: String,
    pub copyright_text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("An active personal information record already exists")]
    SingletonViolation,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts the profile unless an active one already exists.
    async fn create_personal_info(
        &self,
        data: CreatePersonalInfoData,
    ) -> Result<PersonalInfoView, ProfileRepositoryError>;
}
