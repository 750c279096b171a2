use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::project_query_postgres::model_to_detail;
use crate::modules::project::adapter::outgoing::sea_orm_entity::{project_categories, projects};
use crate::modules::project::application::domain::entities::{
    ProjectAction, ProjectCategoryView, ProjectDetail,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectCategoryData, CreateProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::db::is_unique_violation;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_category(
        &self,
        data: CreateProjectCategoryData,
    ) -> Result<ProjectCategoryView, ProjectRepositoryError> {
        let model = project_categories::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(data.name),
            slug: Set(data.slug),
            sort_order: Set(data.order),
            is_active: Set(true),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(ProjectCategoryView {
            id: inserted.id,
            name: inserted.name,
            slug: inserted.slug,
            order: inserted.sort_order,
            project_count: 0,
        })
    }

    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectDetail, ProjectRepositoryError> {
        let category = project_categories::Entity::find_by_id(data.category_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::CategoryNotFound)?;

        let now = Utc::now().fixed_offset();
        let model = projects::ActiveModel {
            id: Set(Uuid::now_v7()),
            category_id: Set(category.id),
            title: Set(data.title),
            slug: Set(data.slug),
            short_description: Set(data.short_description),
            full_description: Set(data.full_description),
            thumbnail: Set(data.thumbnail),
            featured_image: Set(data.featured_image),
            technologies: Set(data.technologies),
            live_url: Set(data.live_url),
            github_url: Set(data.github_url),
            case_study_url: Set(data.case_study_url),
            is_featured: Set(data.is_featured),
            sort_order: Set(data.order),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(model_to_detail(inserted, category.name, category.slug))
    }

    async fn apply_action(
        &self,
        action: ProjectAction,
        ids: &[Uuid],
    ) -> Result<u64, ProjectRepositoryError> {
        let (column, value) = match action {
            ProjectAction::MarkFeatured => (projects::Column::IsFeatured, true),
            ProjectAction::RemoveFeatured => (projects::Column::IsFeatured, false),
            ProjectAction::Activate => (projects::Column::IsActive, true),
            ProjectAction::Deactivate => (projects::Column::IsActive, false),
        };

        let result = projects::Entity::update_many()
            .col_expr(column, Expr::value(value))
            .filter(projects::Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    if is_unique_violation(&e) {
        ProjectRepositoryError::SlugTaken
    } else {
        map_db_err(e)
    }
}
