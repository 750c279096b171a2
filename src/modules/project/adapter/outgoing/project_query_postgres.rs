// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{project_categories, projects};
use crate::modules::project::application::domain::entities::{
    ProjectCategoryView, ProjectDetail, ProjectFilter, ProjectListItem,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};
use crate::shared::formatting::split_technologies;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Name and slug per category id for the given projects.
    async fn category_labels(
        &self,
        rows: &[projects::Model],
    ) -> Result<HashMap<Uuid, (String, String)>, ProjectQueryError> {
        let mut ids: Vec<Uuid> = rows.iter().map(|p| p.category_id).collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let categories = project_categories::Entity::find()
            .filter(project_categories::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(categories
            .into_iter()
            .map(|c| (c.id, (c.name, c.slug)))
            .collect())
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_categories(&self) -> Result<Vec<ProjectCategoryView>, ProjectQueryError> {
        let categories = project_categories::Entity::find()
            .filter(project_categories::Column::IsActive.eq(true))
            .order_by_asc(project_categories::Column::SortOrder)
            .order_by_asc(project_categories::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if categories.is_empty() {
            return Ok(Vec::new());
        }

        // Counted on every read so deactivated projects drop out immediately.
        let active_category_ids = projects::Entity::find()
            .filter(projects::Column::IsActive.eq(true))
            .select_only()
            .column(projects::Column::CategoryId)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for id in active_category_ids {
            *counts.entry(id).or_default() += 1;
        }

        Ok(categories
            .into_iter()
            .map(|c| ProjectCategoryView {
                project_count: counts.get(&c.id).copied().unwrap_or(0),
                id: c.id,
                name: c.name,
                slug: c.slug,
                order: c.sort_order,
            })
            .collect())
    }

    async fn list_projects(
        &self,
        filter: &ProjectFilter,
    ) -> Result<Vec<ProjectListItem>, ProjectQueryError> {
        let mut query = projects::Entity::find().filter(projects::Column::IsActive.eq(true));

        if let Some(ref slug) = filter.category_slug {
            query = query
                .inner_join(project_categories::Entity)
                .filter(project_categories::Column::Slug.eq(slug.as_str()));
        }

        if filter.featured_only {
            query = query.filter(projects::Column::IsFeatured.eq(true));
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", escape_like(search));
            query = query.filter(
                Condition::any()
                    .add(Expr::col((projects::Entity, projects::Column::Title)).ilike(&pattern))
                    .add(
                        Expr::col((projects::Entity, projects::Column::ShortDescription))
                            .ilike(&pattern),
                    )
                    .add(
                        Expr::col((projects::Entity, projects::Column::Technologies))
                            .ilike(&pattern),
                    ),
            );
        }

        query = query
            .order_by_asc(projects::Column::SortOrder)
            .order_by_desc(projects::Column::CreatedAt)
            .order_by_desc(projects::Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let rows = query.all(&*self.db).await.map_err(map_db_err)?;
        let labels = self.category_labels(&rows).await?;

        Ok(rows
            .into_iter()
            .filter_map(|p| {
                let Some((name, slug)) = labels.get(&p.category_id).cloned() else {
                    warn!(project_id = %p.id, category_id = %p.category_id, "Project references a missing category");
                    return None;
                };
                Some(model_to_list_item(p, name, slug))
            })
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ProjectDetail>, ProjectQueryError> {
        let Some(project) = projects::Entity::find()
            .filter(projects::Column::Slug.eq(slug))
            .filter(projects::Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let category = project_categories::Entity::find_by_id(project.category_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                ProjectQueryError::DatabaseError(format!(
                    "project {} references missing category {}",
                    project.id, project.category_id
                ))
            })?;

        Ok(Some(model_to_detail(project, category.name, category.slug)))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escapes LIKE metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn model_to_list_item(p: projects::Model, category_name: String, category_slug: String) -> ProjectListItem {
    ProjectListItem {
        id: p.id,
        technologies_list: split_technologies(&p.technologies),
        title: p.title,
        slug: p.slug,
        category_name,
        category_slug,
        short_description: p.short_description,
        thumbnail: p.thumbnail,
        is_featured: p.is_featured,
        live_url: p.live_url,
        github_url: p.github_url,
        case_study_url: p.case_study_url,
    }
}

pub(crate) fn model_to_detail(
    p: projects::Model,
    category_name: String,
    category_slug: String,
) -> ProjectDetail {
    ProjectDetail {
        id: p.id,
        technologies_list: split_technologies(&p.technologies),
        title: p.title,
        slug: p.slug,
        category_name,
        category_slug,
        short_description: p.short_description,
        full_description: p.full_description,
        thumbnail: p.thumbnail,
        featured_image: p.featured_image,
        is_featured: p.is_featured,
        live_url: p.live_url,
        github_url: p.github_url,
        case_study_url: p.case_study_url,
        created_at: p.created_at.with_timezone(&Utc),
        updated_at: p.updated_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{category_model, project_model};
    use crate::tests::support::sql_log::logged_statements;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn category_id_row(id: Uuid) -> BTreeMap<String, Value> {
        BTreeMap::from([("category_id".to_string(), Value::Uuid(Some(Box::new(id))))])
    }

    // ========================================================================
    // list_categories
    // ========================================================================

    #[tokio::test]
    async fn list_categories_counts_active_projects_per_category() {
        let web = category_model("Web Design", "web-design");
        let brand = category_model("Branding", "branding");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![web.clone(), brand.clone()]])
            .append_query_results(vec![vec![
                category_id_row(web.id),
                category_id_row(web.id),
                category_id_row(brand.id),
            ]])
            .into_connection();

        let categories = ProjectQueryPostgres::new(Arc::new(db))
            .list_categories()
            .await
            .unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].slug, "web-design");
        assert_eq!(categories[0].project_count, 2);
        assert_eq!(categories[1].project_count, 1);
    }

    #[tokio::test]
    async fn list_categories_reports_zero_for_categories_without_projects() {
        let empty = category_model("Illustration", "illustration");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![empty]])
            .append_query_results(vec![Vec::<BTreeMap<String, Value>>::new()])
            .into_connection();

        let categories = ProjectQueryPostgres::new(Arc::new(db))
            .list_categories()
            .await
            .unwrap();

        assert_eq!(categories[0].project_count, 0);
    }

    // ========================================================================
    // list_projects
    // ========================================================================

    #[tokio::test]
    async fn list_projects_attaches_category_labels_and_splits_technologies() {
        let category = category_model("Web Design", "web-design");
        let mut project = project_model(category.id, "Shop", "shop");
        project.technologies = "React, Node.js ,  Tailwind".into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![project]])
            .append_query_results(vec![vec![category]])
            .into_connection();

        let items = ProjectQueryPostgres::new(Arc::new(db))
            .list_projects(&ProjectFilter::default())
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category_name, "Web Design");
        assert_eq!(items[0].category_slug, "web-design");
        assert_eq!(items[0].technologies_list, ["React", "Node.js", "Tailwind"]);
    }

    #[tokio::test]
    async fn list_projects_reads_only_active_rows_in_display_order() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<projects::Model>::new()])
                .into_connection(),
        );

        ProjectQueryPostgres::new(db.clone())
            .list_projects(&ProjectFilter::default())
            .await
            .unwrap();

        let log = logged_statements(&db);
        assert_eq!(log.len(), 1);
        assert!(log[0].sql.contains(r#""projects"."is_active" = $1"#));
        assert!(log[0].binds(true));
        assert!(log[0].sql.ends_with(
            r#"ORDER BY "projects"."sort_order" ASC, "projects"."created_at" DESC, "projects"."id" DESC"#
        ));
        assert!(!log[0].sql.contains("LIMIT"));
        assert!(!log[0].sql.contains("is_featured"));
    }

    #[tokio::test]
    async fn list_projects_applies_every_filter_and_the_limit() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<projects::Model>::new()])
                .into_connection(),
        );

        let filter = ProjectFilter {
            category_slug: Some("branding".into()),
            featured_only: true,
            search: Some("50%_off".into()),
            limit: Some(6),
        };
        let items = ProjectQueryPostgres::new(db.clone())
            .list_projects(&filter)
            .await
            .unwrap();
        assert!(items.is_empty());

        // No rows, so no category label lookup either.
        let log = logged_statements(&db);
        assert_eq!(log.len(), 1);

        let select = &log[0];
        assert!(select.sql.contains(r#"INNER JOIN "project_categories""#));
        assert!(select.sql.contains(r#""project_categories"."slug" = $"#));
        assert!(select.binds("branding"));
        assert!(select.sql.contains(r#""projects"."is_active" = $"#));
        assert!(select.sql.contains(r#""projects"."is_featured" = $"#));
        assert!(select.sql.contains(r#""projects"."title" ILIKE $"#));
        assert!(select.sql.contains(r#""projects"."short_description" ILIKE $"#));
        assert!(select.sql.contains(r#""projects"."technologies" ILIKE $"#));
        assert!(select.sql.contains(" OR "));
        assert!(select.binds(r"%50\%\_off%"));
        assert!(select.sql.contains("LIMIT $"));
        assert!(select.binds(6u64));
    }

    // ========================================================================
    // find_by_slug
    // ========================================================================

    #[tokio::test]
    async fn find_by_slug_returns_detail() {
        let category = category_model("Web Design", "web-design");
        let project = project_model(category.id, "Shop", "shop");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![project]])
            .append_query_results(vec![vec![category]])
            .into_connection();

        let detail = ProjectQueryPostgres::new(Arc::new(db))
            .find_by_slug("shop")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(detail.title, "Shop");
        assert_eq!(detail.category_slug, "web-design");
        assert_eq!(detail.full_description, "Full write-up");
    }

    #[tokio::test]
    async fn find_by_slug_none_for_inactive_or_unknown() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<projects::Model>::new()])
                .into_connection(),
        );

        let result = ProjectQueryPostgres::new(db.clone())
            .find_by_slug("hidden")
            .await
            .unwrap();
        assert!(result.is_none());

        let log = logged_statements(&db);
        assert_eq!(log.len(), 1);
        assert!(log[0].sql.contains(r#""projects"."slug" = $1"#));
        assert!(log[0].sql.contains(r#""projects"."is_active" = $2"#));
        assert!(log[0].binds("hidden"));
        assert!(log[0].binds(true));
    }

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("react"), "react");
    }
}
