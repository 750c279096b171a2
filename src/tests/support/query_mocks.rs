//! mockall doubles for the read-side ports the page aggregates fan out to.

use async_trait::async_trait;
use mockall::mock;

use crate::modules::career::application::domain::entities::{
    EducationView, ExperienceView, TimelineView,
};
use crate::modules::career::application::ports::outgoing::{
    CareerQuery as CareerQueryPort, CareerQueryError,
};
use crate::modules::profile::application::domain::entities::{CoreExpertiseView, PersonalInfoView};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery as ProfileQueryPort, ProfileQueryError,
};
use crate::modules::project::application::domain::entities::{
    ProjectCategoryView, ProjectDetail, ProjectFilter, ProjectListItem,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery as ProjectQueryPort, ProjectQueryError,
};
use crate::modules::skill::application::domain::entities::{SkillCategory, SkillView, ToolView};
use crate::modules::skill::application::ports::outgoing::{
    SkillQuery as SkillQueryPort, SkillQueryError,
};

mock! {
    pub ProfileQuery {}

    #[async_trait]
    impl ProfileQueryPort for ProfileQuery {
        async fn find_active_personal_info(&self) -> Result<Option<PersonalInfoView>, ProfileQueryError>;
        async fn list_core_expertise(&self) -> Result<Vec<CoreExpertiseView>, ProfileQueryError>;
    }
}

mock! {
    pub ProjectQuery {}

    #[async_trait]
    impl ProjectQueryPort for ProjectQuery {
        async fn list_categories(&self) -> Result<Vec<ProjectCategoryView>, ProjectQueryError>;
        async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<ProjectListItem>, ProjectQueryError>;
        async fn find_by_slug(&self, slug: &str) -> Result<Option<ProjectDetail>, ProjectQueryError>;
    }
}

mock! {
    pub CareerQuery {}

    #[async_trait]
    impl CareerQueryPort for CareerQuery {
        async fn list_experience(&self) -> Result<Vec<ExperienceView>, CareerQueryError>;
        async fn list_education(&self) -> Result<Vec<EducationView>, CareerQueryError>;
        async fn list_timeline(&self, limit: Option<u64>) -> Result<Vec<TimelineView>, CareerQueryError>;
    }
}

mock! {
    pub SkillQuery {}

    #[async_trait]
    impl SkillQueryPort for SkillQuery {
        async fn list_skills(&self, category: Option<SkillCategory>) -> Result<Vec<SkillView>, SkillQueryError>;
        async fn list_tools(&self) -> Result<Vec<ToolView>, SkillQueryError>;
    }
}
