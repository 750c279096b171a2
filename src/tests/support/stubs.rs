//! Placeholders wired into `TestAppStateBuilder` for use cases a test does not exercise.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::career::application::domain::entities::{
    EducationView, ExperienceView, TimelineView,
};
use crate::modules::career::application::ports::incoming::use_cases::*;
use crate::modules::contact::application::domain::entities::{
    ContactMessageAction, ContactMessageView,
};
use crate::modules::contact::application::ports::incoming::use_cases::*;
use crate::modules::newsletter::application::domain::entities::{
    SubscriberAction, SubscriptionOutcome,
};
use crate::modules::newsletter::application::ports::incoming::use_cases::*;
use crate::modules::pages::application::domain::entities::{
    AboutPageData, ExperiencePageData, HomepageData, SkillsPageData,
};
use crate::modules::pages::application::ports::incoming::use_cases::*;
use crate::modules::profile::application::domain::entities::{CoreExpertiseView, PersonalInfoView};
use crate::modules::profile::application::ports::incoming::use_cases::*;
use crate::modules::project::application::domain::entities::{
    ProjectAction, ProjectCategoryView, ProjectDetail, ProjectFilter, ProjectListItem,
};
use crate::modules::project::application::ports::incoming::use_cases::*;
use crate::modules::site_settings::application::domain::entities::SiteSettingsView;
use crate::modules::site_settings::application::ports::incoming::use_cases::*;
use crate::modules::skill::application::domain::entities::{SkillView, SkillsByCategory, ToolView};
use crate::modules::skill::application::ports::incoming::use_cases::*;
use crate::modules::testimonial::application::domain::entities::TestimonialView;
use crate::modules::testimonial::application::ports::incoming::use_cases::*;

/// Stands in for every use case; panics if a handler actually reaches it.
#[derive(Default, Clone, Copy)]
pub struct Unused;

macro_rules! unused {
    () => {
        unimplemented!("Not used in this test")
    };
}

// ---------------------------------------------------------------------------
// Profile and site settings
// ---------------------------------------------------------------------------

#[async_trait]
impl GetPersonalInfoUseCase for Unused {
    async fn execute(&self) -> Result<PersonalInfoView, GetPersonalInfoError> {
        unused!()
    }
}

#[async_trait]
impl GetCoreExpertiseUseCase for Unused {
    async fn execute(&self) -> Result<Vec<CoreExpertiseView>, GetCoreExpertiseError> {
        unused!()
    }
}

#[async_trait]
impl CreatePersonalInfoUseCase for Unused {
    async fn execute(
        &self,
        _command: CreatePersonalInfoCommand,
    ) -> Result<PersonalInfoView, CreatePersonalInfoError> {
        unused!()
    }
}

#[async_trait]
impl GetSiteSettingsUseCase for Unused {
    async fn execute(&self) -> Result<SiteSettingsView, GetSiteSettingsError> {
        unused!()
    }
}

#[async_trait]
impl CreateSiteSettingsUseCase for Unused {
    async fn execute(
        &self,
        _command: CreateSiteSettingsCommand,
    ) -> Result<SiteSettingsView, CreateSiteSettingsError> {
        unused!()
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[async_trait]
impl ListSkillsUseCase for Unused {
    async fn execute(&self, _category: Option<&str>) -> Result<Vec<SkillView>, ListSkillsError> {
        unused!()
    }
}

#[async_trait]
impl GetSkillsByCategoryUseCase for Unused {
    async fn execute(&self) -> Result<SkillsByCategory, GetSkillsByCategoryError> {
        unused!()
    }
}

#[async_trait]
impl ListToolsUseCase for Unused {
    async fn execute(&self) -> Result<Vec<ToolView>, ListToolsError> {
        unused!()
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[async_trait]
impl ListProjectCategoriesUseCase for Unused {
    async fn execute(&self) -> Result<Vec<ProjectCategoryView>, ListProjectCategoriesError> {
        unused!()
    }
}

#[async_trait]
impl ListProjectsUseCase for Unused {
    async fn execute(&self, _filter: ProjectFilter) -> Result<Vec<ProjectListItem>, ListProjectsError> {
        unused!()
    }
}

#[async_trait]
impl GetProjectUseCase for Unused {
    async fn execute(&self, _slug: &str) -> Result<ProjectDetail, GetProjectError> {
        unused!()
    }
}

#[async_trait]
impl CreateProjectCategoryUseCase for Unused {
    async fn execute(
        &self,
        _command: CreateProjectCategoryCommand,
    ) -> Result<ProjectCategoryView, CreateProjectCategoryError> {
        unused!()
    }
}

#[async_trait]
impl CreateProjectUseCase for Unused {
    async fn execute(&self, _command: CreateProjectCommand) -> Result<ProjectDetail, CreateProjectError> {
        unused!()
    }
}

#[async_trait]
impl ApplyProjectActionUseCase for Unused {
    async fn execute(
        &self,
        _action: ProjectAction,
        _ids: Vec<Uuid>,
    ) -> Result<u64, ApplyProjectActionError> {
        unused!()
    }
}

// ---------------------------------------------------------------------------
// Career and testimonials
// ---------------------------------------------------------------------------

#[async_trait]
impl ListExperienceUseCase for Unused {
    async fn execute(&self) -> Result<Vec<ExperienceView>, ListExperienceError> {
        unused!()
    }
}

#[async_trait]
impl ListEducationUseCase for Unused {
    async fn execute(&self) -> Result<Vec<EducationView>, ListEducationError> {
        unused!()
    }
}

#[async_trait]
impl ListTimelineUseCase for Unused {
    async fn execute(&self, _limit: Option<u64>) -> Result<Vec<TimelineView>, ListTimelineError> {
        unused!()
    }
}

#[async_trait]
impl ListTestimonialsUseCase for Unused {
    async fn execute(&self) -> Result<Vec<TestimonialView>, ListTestimonialsError> {
        unused!()
    }
}

// ---------------------------------------------------------------------------
// Contact and newsletter
// ---------------------------------------------------------------------------

#[async_trait]
impl SubmitContactMessageUseCase for Unused {
    async fn execute(
        &self,
        _command: SubmitContactMessageCommand,
    ) -> Result<ContactMessageView, SubmitContactMessageError> {
        unused!()
    }
}

#[async_trait]
impl ListContactMessagesUseCase for Unused {
    async fn execute(&self) -> Result<Vec<ContactMessageView>, ListContactMessagesError> {
        unused!()
    }
}

#[async_trait]
impl ApplyContactMessageActionUseCase for Unused {
    async fn execute(
        &self,
        _action: ContactMessageAction,
        _ids: Vec<Uuid>,
    ) -> Result<u64, ApplyContactMessageActionError> {
        unused!()
    }
}

#[async_trait]
impl SubscribeUseCase for Unused {
    async fn execute(&self, _command: SubscribeCommand) -> Result<SubscriptionOutcome, SubscribeError> {
        unused!()
    }
}

#[async_trait]
impl ApplySubscriberActionUseCase for Unused {
    async fn execute(
        &self,
        _action: SubscriberAction,
        _ids: Vec<Uuid>,
    ) -> Result<u64, ApplySubscriberActionError> {
        unused!()
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[async_trait]
impl GetHomepageUseCase for Unused {
    async fn execute(&self) -> Result<HomepageData, GetHomepageError> {
        unused!()
    }
}

#[async_trait]
impl GetAboutPageUseCase for Unused {
    async fn execute(&self) -> Result<AboutPageData, GetAboutPageError> {
        unused!()
    }
}

#[async_trait]
impl GetSkillsPageUseCase for Unused {
    async fn execute(&self) -> Result<SkillsPageData, GetSkillsPageError> {
        unused!()
    }
}

#[async_trait]
impl GetExperiencePageUseCase for Unused {
    async fn execute(&self) -> Result<ExperiencePageData, GetExperiencePageError> {
        unused!()
    }
}
