use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AchievementView {
    pub id: Uuid,
    pub description: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceView {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// True when no end date is stored.
    pub is_current: bool,
    #[schema(example = "Mar 2021 - Present")]
    pub date_display: String,
    pub description: String,
    pub technologies_list: Vec<String>,
    pub achievements: Vec<AchievementView>,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EducationView {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub year: i32,
    pub description: String,
    #[schema(example = "graduation-cap")]
    pub icon_name: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimelineView {
    pub id: Uuid,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub order: i32,
}
