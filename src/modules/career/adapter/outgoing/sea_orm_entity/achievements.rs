use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    #[sea_orm(column_type = "Uuid")]
    pub experience_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experiences::Entity",
        from = "Column::ExperienceId",
        to = "super::experiences::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Experiences,
}

impl Related<super::experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
