use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Public profile. Bookkeeping columns (id, timestamps, is_active) stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonalInfoView {
    #[schema(example = "Jane Doe")]
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

/// Hero counters echoed into page aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileStats {
    pub years_experience: i32,
    pub projects_completed: i32,
    pub awards_won: i32,
    pub happy_clients: i32,
}

impl PersonalInfoView {
    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            years_experience: self.years_experience,
            projects_completed: self.projects_completed,
            awards_won: self.awards_won,
            happy_clients: self.happy_clients,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CoreExpertiseView {
    pub id: Uuid,
    #[schema(example = "Web Development")]
    pub title: String,
    #[schema(example = "code")]
    pub icon_name: String,
    pub order: i32,
}
