use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::career::application::domain::entities::{
    EducationView, ExperienceView, TimelineView,
};
use crate::modules::profile::application::domain::entities::{
    CoreExpertiseView, PersonalInfoView, ProfileStats,
};
use crate::modules::project::application::domain::entities::ProjectListItem;
use crate::modules::skill::application::domain::entities::{
    SkillGroupSchema, SkillsByCategory, ToolView,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HomepageData {
    pub personal_info: PersonalInfoView,
    pub core_expertise: Vec<CoreExpertiseView>,
    pub featured_projects: Vec<ProjectListItem>,
    pub timeline: Vec<TimelineView>,
    pub stats: ProfileStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AboutPageData {
    pub personal_info: PersonalInfoView,
    pub core_expertise: Vec<CoreExpertiseView>,
    pub timeline: Vec<TimelineView>,
    pub stats: ProfileStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SkillsPageData {
    /// Only categories with at least one active skill.
    #[schema(value_type = std::collections::HashMap<String, SkillGroupSchema>)]
    pub skills_by_category: SkillsByCategory,
    pub tools: Vec<ToolView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ExperiencePageData {
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub timeline: Vec<TimelineView>,
}
