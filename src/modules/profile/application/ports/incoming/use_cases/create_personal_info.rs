use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::profile::application::domain::entities::PersonalInfoView;
use crate::modules::profile::application::ports::outgoing::CreatePersonalInfoData;
use crate::shared::validation::FieldErrors;

//
// ──────────────────────────────────────────────────────────
// Raw input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PersonalInfoDraft {
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

//
// ──────────────────────────────────────────────────────────
// Command (validated)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePersonalInfoCommand {
    data: CreatePersonalInfoData,
}

impl CreatePersonalInfoCommand {
    pub fn new(draft: PersonalInfoDraft) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let data = CreatePersonalInfoData {
            name: errors.required_text("name", &draft.name, 100),
            title: errors.required_text("title", &draft.title, 200),
            tagline: errors.required_text("tagline", &draft.tagline, 500),
            hero_description: errors.required_text(
                "hero_description",
                &draft.hero_description,
                usize::MAX,
            ),
            about_heading: errors.required_text("about_heading", &draft.about_heading, 200),
            about_description: errors.required_text(
                "about_description",
                &draft.about_description,
                usize::MAX,
            ),
            about_detail: errors.required_text("about_detail", &draft.about_detail, usize::MAX),
            email: errors.required_email("email", &draft.email),
            phone: errors.required_text("phone", &draft.phone, 20),
            location: errors.required_text("location", &draft.location, 100),
            availability_status: errors.required_text(
                "availability_status",
                &draft.availability_status,
                100,
            ),
            years_experience: draft.years_experience,
            projects_completed: draft.projects_completed,
            awards_won: draft.awards_won,
            happy_clients: draft.happy_clients,
            linkedin_url: errors.optional_url("linkedin_url", draft.linkedin_url.as_deref()),
            github_url: errors.optional_url("github_url", draft.github_url.as_deref()),
            twitter_url: errors.optional_url("twitter_url", draft.twitter_url.as_deref()),
            dribbble_url: errors.optional_url("dribbble_url", draft.dribbble_url.as_deref()),
            resume_pdf: errors.optional_text("resume_pdf", draft.resume_pdf.as_deref(), 255),
            footer_tagline: errors.required_text("footer_tagline", &draft.footer_tagline, 200),
            copyright_text: errors.required_text("copyright_text", &draft.copyright_text, 200),
        };

        errors.non_negative("years_experience", data.years_experience);
        errors.non_negative("projects_completed", data.projects_completed);
        errors.non_negative("awards_won", data.awards_won);
        errors.non_negative("happy_clients", data.happy_clients);

        errors.finish(Self { data })
    }

    pub fn data(&self) -> &CreatePersonalInfoData {
        &self.data
    }

    pub fn into_data(self) -> CreatePersonalInfoData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePersonalInfoError {
    #[error("Only one active personal information record is allowed")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePersonalInfoUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreatePersonalInfoCommand,
    ) -> Result<PersonalInfoView, CreatePersonalInfoError>;
}
