// src/modules/career/adapter/outgoing/career_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::career::adapter::outgoing::sea_orm_entity::{
    achievements, education, experiences, timeline,
};
use crate::modules::career::application::domain::entities::{
    AchievementView, EducationView, ExperienceView, TimelineView,
};
use crate::modules::career::application::ports::outgoing::{CareerQuery, CareerQueryError};
use crate::shared::formatting::{format_date_range, split_technologies};

#[derive(Clone)]
pub struct CareerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CareerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn achievements_by_experience(
        &self,
        experience_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<AchievementView>>, CareerQueryError> {
        let rows = achievements::Entity::find()
            .filter(achievements::Column::ExperienceId.is_in(experience_ids))
            .order_by_asc(achievements::Column::SortOrder)
            .order_by_asc(achievements::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut grouped: HashMap<Uuid, Vec<AchievementView>> = HashMap::new();
        for row in rows {
            grouped.entry(row.experience_id).or_default().push(AchievementView {
                id: row.id,
                description: row.description,
                order: row.sort_order,
            });
        }

        Ok(grouped)
    }
}

#[async_trait]
impl CareerQuery for CareerQueryPostgres {
    async fn list_experience(&self) -> Result<Vec<ExperienceView>, CareerQueryError> {
        let rows = experiences::Entity::find()
            .filter(experiences::Column::IsActive.eq(true))
            .order_by_desc(experiences::Column::StartDate)
            .order_by_asc(experiences::Column::SortOrder)
            .order_by_asc(experiences::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut achievements = self
            .achievements_by_experience(rows.iter().map(|e| e.id).collect())
            .await?;

        Ok(rows
            .into_iter()
            .map(|e| {
                let nested = achievements.remove(&e.id).unwrap_or_default();
                experience_to_view(e, nested)
            })
            .collect())
    }

    async fn list_education(&self) -> Result<Vec<EducationView>, CareerQueryError> {
        let rows = education::Entity::find()
            .filter(education::Column::IsActive.eq(true))
            .order_by_desc(education::Column::Year)
            .order_by_asc(education::Column::SortOrder)
            .order_by_asc(education::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| EducationView {
                id: m.id,
                degree: m.degree,
                institution: m.institution,
                year: m.year,
                description: m.description,
                icon_name: m.icon_name,
                order: m.sort_order,
            })
            .collect())
    }

    async fn list_timeline(&self, limit: Option<u64>) -> Result<Vec<TimelineView>, CareerQueryError> {
        let mut query = timeline::Entity::find()
            .filter(timeline::Column::IsActive.eq(true))
            .order_by_desc(timeline::Column::Year)
            .order_by_asc(timeline::Column::SortOrder)
            .order_by_asc(timeline::Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows = query.all(&*self.db).await.map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| TimelineView {
                id: m.id,
                year: m.year,
                title: m.title,
                description: m.description,
                order: m.sort_order,
            })
            .collect())
    }
}

fn experience_to_view(m: experiences::Model, achievements: Vec<AchievementView>) -> ExperienceView {
    ExperienceView {
        id: m.id,
        date_display: format_date_range(m.start_date, m.end_date),
        is_current: m.end_date.is_none(),
        technologies_list: split_technologies(&m.technologies),
        title: m.title,
        company: m.company,
        start_date: m.start_date,
        end_date: m.end_date,
        description: m.description,
        achievements,
        order: m.sort_order,
    }
}

fn map_db_err(e: DbErr) -> CareerQueryError {
    CareerQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::tests::support::sql_log::logged_statements;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn experience_model(title: &str, start: NaiveDate, end: Option<NaiveDate>) -> experiences::Model {
        experiences::Model {
            id: Uuid::now_v7(),
            title: title.to_string(),
            company: "Acme".to_string(),
            start_date: start,
            end_date: end,
            description: "Built things".to_string(),
            technologies: "Rust, Postgres ,".to_string(),
            sort_order: 0,
            is_active: true,
        }
    }

    fn achievement_model(experience_id: Uuid, description: &str, sort_order: i32) -> achievements::Model {
        achievements::Model {
            id: Uuid::now_v7(),
            experience_id,
            description: description.to_string(),
            sort_order,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn list_experience_nests_achievements_and_derives_display() {
        let current = experience_model("Lead Engineer", date(2021, 3, 1), None);
        let past = experience_model("Engineer", date(2020, 1, 1), Some(date(2022, 6, 1)));

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![current.clone(), past.clone()]])
                .append_query_results(vec![vec![
                    achievement_model(current.id, "Shipped v2", 0),
                    achievement_model(current.id, "Cut latency", 1),
                ]])
                .into_connection(),
        );

        let list = CareerQueryPostgres::new(db.clone())
            .list_experience()
            .await
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].date_display, "Mar 2021 - Present");
        assert!(list[0].is_current);
        assert_eq!(list[0].technologies_list, vec!["Rust", "Postgres"]);
        assert_eq!(list[0].achievements.len(), 2);
        assert_eq!(list[0].achievements[0].description, "Shipped v2");

        assert_eq!(list[1].date_display, "Jan 2020 - Jun 2022");
        assert!(!list[1].is_current);
        assert!(list[1].achievements.is_empty());

        let log = logged_statements(&db);
        assert_eq!(log.len(), 2);
        assert!(log[0].sql.contains(r#""experiences"."is_active" = $1"#));
        assert!(log[0].binds(true));
        assert!(log[0].sql.ends_with(
            r#"ORDER BY "experiences"."start_date" DESC, "experiences"."sort_order" ASC, "experiences"."id" ASC"#
        ));
        assert!(log[1].sql.contains(r#""achievements"."experience_id" IN ($1, $2)"#));
        assert!(log[1].sql.ends_with(
            r#"ORDER BY "achievements"."sort_order" ASC, "achievements"."id" ASC"#
        ));
    }

    #[tokio::test]
    async fn list_experience_without_rows_skips_achievement_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<experiences::Model>::new()])
            .into_connection();

        let list = CareerQueryPostgres::new(Arc::new(db))
            .list_experience()
            .await
            .unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn list_education_keeps_icon_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![education::Model {
                id: Uuid::now_v7(),
                degree: "BSc Computer Science".into(),
                institution: "State University".into(),
                year: 2015,
                description: String::new(),
                icon_name: "graduation-cap".into(),
                sort_order: 0,
                is_active: true,
            }]])
            .into_connection();

        let list = CareerQueryPostgres::new(Arc::new(db))
            .list_education()
            .await
            .unwrap();
        assert_eq!(list[0].icon_name, "graduation-cap");
        assert_eq!(list[0].year, 2015);
    }

    #[tokio::test]
    async fn list_timeline_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![timeline::Model {
                id: Uuid::now_v7(),
                year: 2023,
                title: "Started freelancing".into(),
                description: String::new(),
                sort_order: 2,
                is_active: true,
            }]])
            .into_connection();

        let list = CareerQueryPostgres::new(Arc::new(db))
            .list_timeline(Some(5))
            .await
            .unwrap();
        assert_eq!(list[0].title, "Started freelancing");
        assert_eq!(list[0].order, 2);
    }

    #[tokio::test]
    async fn list_timeline_orders_newest_year_first_and_limits() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<timeline::Model>::new()])
                .append_query_results(vec![Vec::<timeline::Model>::new()])
                .into_connection(),
        );
        let query = CareerQueryPostgres::new(db.clone());

        query.list_timeline(Some(5)).await.unwrap();
        query.list_timeline(None).await.unwrap();

        let log = logged_statements(&db);
        assert_eq!(log.len(), 2);

        let ordering =
            r#"ORDER BY "timeline_entries"."year" DESC, "timeline_entries"."sort_order" ASC, "timeline_entries"."id" ASC"#;
        assert!(log[0].sql.contains(r#""timeline_entries"."is_active" = $1"#));
        assert!(log[0].sql.contains(&format!("{ordering} LIMIT $2")));
        assert!(log[0].binds(5u64));

        assert!(log[1].sql.ends_with(ordering));
        assert!(!log[1].sql.contains("LIMIT"));
    }

    #[tokio::test]
    async fn list_education_orders_by_year_then_order() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<education::Model>::new()])
                .into_connection(),
        );

        CareerQueryPostgres::new(db.clone()).list_education().await.unwrap();

        let log = logged_statements(&db);
        assert!(log[0].sql.contains(r#""education"."is_active" = $1"#));
        assert!(log[0].sql.ends_with(
            r#"ORDER BY "education"."year" DESC, "education"."sort_order" ASC, "education"."id" ASC"#
        ));
    }

    #[tokio::test]
    async fn database_error_is_wrapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("timeout".into())])
            .into_connection();

        let result = CareerQueryPostgres::new(Arc::new(db)).list_timeline(None).await;
        assert!(matches!(result, Err(CareerQueryError::DatabaseError(_))));
    }
}
