// src/modules/skill/adapter/outgoing/skill_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::warn;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::{skills, tools};
use crate::modules::skill::application::domain::entities::{SkillCategory, SkillView, ToolView};
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_skills(
        &self,
        category: Option<SkillCategory>,
    ) -> Result<Vec<SkillView>, SkillQueryError> {
        let mut query = skills::Entity::find().filter(skills::Column::IsActive.eq(true));

        if let Some(category) = category {
            query = query.filter(skills::Column::Category.eq(category.code()));
        }

        let models = query
            .order_by_asc(skills::Column::Category)
            .order_by_asc(skills::Column::SortOrder)
            .order_by_asc(skills::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().filter_map(skill_to_view).collect())
    }

    async fn list_tools(&self) -> Result<Vec<ToolView>, SkillQueryError> {
        let models = tools::Entity::find()
            .filter(tools::Column::IsActive.eq(true))
            .order_by_asc(tools::Column::SortOrder)
            .order_by_asc(tools::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| ToolView {
                id: m.id,
                name: m.name,
                order: m.sort_order,
            })
            .collect())
    }
}

// Rows carrying a code outside the known set are skipped rather than failing the list.
fn skill_to_view(m: skills::Model) -> Option<SkillView> {
    let Some(category) = SkillCategory::from_code(&m.category) else {
        warn!(skill_id = %m.id, category = %m.category, "Skipping skill with unknown category");
        return None;
    };

    Some(SkillView {
        id: m.id,
        name: m.name,
        category,
        category_display: category.display_name().to_string(),
        proficiency: m.proficiency,
        icon_name: m.icon_name,
        order: m.sort_order,
    })
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::sql_log::logged_statements;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn skill_model(name: &str, category: &str, sort_order: i32) -> skills::Model {
        skills::Model {
            id: Uuid::now_v7(),
            name: name.to_string(),
            category: category.to_string(),
            proficiency: 4,
            icon_name: String::new(),
            sort_order,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn list_skills_derives_category_display() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                skill_model("Figma", "uiux", 0),
                skill_model("React", "frontend", 1),
            ]])
            .into_connection();

        let skills = SkillQueryPostgres::new(Arc::new(db))
            .list_skills(None)
            .await
            .unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].category, SkillCategory::Uiux);
        assert_eq!(skills[0].category_display, "UI/UX");
        assert_eq!(skills[1].order, 1);
    }

    #[tokio::test]
    async fn list_skills_skips_unknown_categories() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                skill_model("Kubernetes", "devops", 0),
                skill_model("Swift", "mobile", 0),
            ]])
            .into_connection();

        let skills = SkillQueryPostgres::new(Arc::new(db))
            .list_skills(None)
            .await
            .unwrap();

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Swift");
    }

    #[tokio::test]
    async fn list_skills_filters_active_rows_by_category_code() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<skills::Model>::new()])
                .append_query_results(vec![Vec::<skills::Model>::new()])
                .into_connection(),
        );
        let query = SkillQueryPostgres::new(db.clone());

        query.list_skills(Some(SkillCategory::Frontend)).await.unwrap();
        query.list_skills(None).await.unwrap();

        let log = logged_statements(&db);
        let ordering =
            r#"ORDER BY "skills"."category" ASC, "skills"."sort_order" ASC, "skills"."id" ASC"#;

        assert!(log[0].sql.contains(r#""skills"."is_active" = $1"#));
        assert!(log[0].sql.contains(r#""skills"."category" = $2"#));
        assert!(log[0].binds(true));
        assert!(log[0].binds("frontend"));
        assert!(log[0].sql.ends_with(ordering));

        assert!(!log[1].sql.contains(r#""skills"."category" = "#));
        assert!(log[1].sql.ends_with(ordering));
    }

    #[tokio::test]
    async fn list_tools_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![tools::Model {
                id: Uuid::now_v7(),
                name: "Figma".into(),
                sort_order: 3,
                is_active: true,
            }]])
            .into_connection();

        let tools = SkillQueryPostgres::new(Arc::new(db)).list_tools().await.unwrap();
        assert_eq!(tools[0].name, "Figma");
        assert_eq!(tools[0].order, 3);
    }

    #[tokio::test]
    async fn database_error_is_wrapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("pool timeout".into())])
            .into_connection();

        let result = SkillQueryPostgres::new(Arc::new(db)).list_tools().await;
        assert!(matches!(result, Err(SkillQueryError::DatabaseError(_))));
    }
}
