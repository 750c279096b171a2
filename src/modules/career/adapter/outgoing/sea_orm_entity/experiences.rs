use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub start_date: Date,
    /// Empty for the current position.
    #[sea_orm(nullable)]
    pub end_date: Option<Date>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub technologies: String,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::achievements::Entity")]
    Achievements,
}

impl Related<super::achievements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Achievements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
