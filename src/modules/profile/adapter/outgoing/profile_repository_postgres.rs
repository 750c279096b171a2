use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::profile_query_postgres::personal_info_to_view;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::personal_info::{
    ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::entities::PersonalInfoView;
use crate::modules::profile::application::ports::outgoing::{
    CreatePersonalInfoData, ProfileRepository, ProfileRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create_personal_info(
        &self,
        data: CreatePersonalInfoData,
    ) -> Result<PersonalInfoView, ProfileRepositoryError> {
        let existing = Entity::find()
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if existing.is_some() {
            return Err(ProfileRepositoryError::SingletonViolation);
        }

        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(data.name),
            title: Set(data.title),
            tagline: Set(data.tagline),
            hero_description: Set(data.hero_description),
            about_heading: Set(data.about_heading),
            about_description: Set(data.about_description),
            about_detail: Set(data.about_detail),
            email: Set(data.email),
            phone: Set(data.phone),
            location: Set(data.location),
            availability_status: Set(data.availability_status),
            years_experience: Set(data.years_experience),
            projects_completed: Set(data.projects_completed),
            awards_won: Set(data.awards_won),
            happy_clients: Set(data.happy_clients),
            linkedin_url: Set(data.linkedin_url),
            github_url: Set(data.github_url),
            twitter_url: Set(data.twitter_url),
            dribbble_url: Set(data.dribbble_url),
            resume_pdf: Set(data.resume_pdf),
            footer_tagline: Set(data.footer_tagline),
            copyright_text: Set(data.copyright_text),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;

        Ok(personal_info_to_view(inserted))
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// A concurrent create can slip past the lookup; the partial unique index catches it.
fn map_insert_err(e: DbErr) -> ProfileRepositoryError {
    if is_unique_violation(&e) {
        ProfileRepositoryError::SingletonViolation
    } else {
        map_db_err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::adapter::outgoing::sea_orm_entity::personal_info;
    use crate::tests::support::fixtures::{personal_info_model, sample_personal_info_data};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn inserts_when_no_active_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<personal_info::Model>::new()])
            .append_query_results(vec![vec![personal_info_model()]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let view = repo
            .create_personal_info(sample_personal_info_data())
            .await
            .unwrap();

        assert_eq!(view.name, "Jane Doe");
    }

    #[tokio::test]
    async fn refuses_second_active_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![personal_info_model()]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_personal_info(sample_personal_info_data()).await;

        assert!(matches!(result, Err(ProfileRepositoryError::SingletonViolation)));
    }

    #[tokio::test]
    async fn lookup_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("timeout".into())])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_personal_info(sample_personal_info_data()).await;

        assert!(matches!(result, Err(ProfileRepositoryError::DatabaseError(_))));
    }
}
