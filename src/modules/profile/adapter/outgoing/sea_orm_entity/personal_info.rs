use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "personal_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,
    pub title: String,
    pub tagline: String,
    #[sea_orm(column_type = "Text")]
    pub hero_description: String,
    pub about_heading: String,
    #[sea_orm(column_type = "Text")]
    pub about_description: String,
    #[sea_orm(column_type = "Text")]
    pub about_detail: String,

    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability_status: String,

    pub years_experience: i32,
    pub projects_completed: i32,
    pub awards_won: i32,
    pub happy_clients: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub twitter_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub dribbble_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub resume_pdf: Option<String>,

    pub footer_tagline: String,
    pub copyright_text: String,

    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
