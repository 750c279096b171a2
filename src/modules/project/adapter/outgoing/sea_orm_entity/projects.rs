use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub category_id: Uuid,

    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub full_description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub featured_image: Option<String>,

    /// Comma-delimited technology names.
    pub technologies: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub case_study_url: Option<String>,

    pub is_featured: bool,
    pub sort_order: i32,
    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_categories::Entity",
        from = "Column::CategoryId",
        to = "super::project_categories::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ProjectCategories,
}

impl Related<super::project_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
