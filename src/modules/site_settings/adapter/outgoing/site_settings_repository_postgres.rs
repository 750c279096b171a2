use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::site_settings::adapter::outgoing::sea_orm_entity::site_settings::{
    ActiveModel, Column, Entity,
};
use crate::modules::site_settings::adapter::outgoing::site_settings_query_postgres::model_to_view;
use crate::modules::site_settings::application::domain::entities::SiteSettingsView;
use crate::modules::site_settings::application::ports::outgoing::{
    CreateSiteSettingsData, SiteSettingsRepository, SiteSettingsRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone)]
pub struct SiteSettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SiteSettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SiteSettingsRepository for SiteSettingsRepositoryPostgres {
    async fn create(
        &self,
        data: CreateSiteSettingsData,
    ) -> Result<SiteSettingsView, SiteSettingsRepositoryError> {
        let existing = Entity::find()
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if existing.is_some() {
            return Err(SiteSettingsRepositoryError::SingletonViolation);
        }

        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            site_title: Set(data.site_title),
            site_description: Set(data.site_description),
            favicon: Set(data.favicon),
            logo: Set(data.logo),
            meta_keywords: Set(data.meta_keywords),
            google_analytics_id: Set(data.google_analytics_id),
            primary_color: Set(data.primary_color),
            is_active: Set(true),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                SiteSettingsRepositoryError::SingletonViolation
            } else {
                map_db_err(e)
            }
        })?;

        Ok(model_to_view(inserted))
    }
}

fn map_db_err(e: DbErr) -> SiteSettingsRepositoryError {
    SiteSettingsRepositoryError::DatabaseError(e.to_string())
}
