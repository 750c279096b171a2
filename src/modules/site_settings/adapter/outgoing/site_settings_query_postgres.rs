use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::site_settings::adapter::outgoing::sea_orm_entity::site_settings::{
    self, Column, Entity,
};
use crate::modules::site_settings::application::domain::entities::SiteSettingsView;
use crate::modules::site_settings::application::ports::outgoing::{
    SiteSettingsQuery, SiteSettingsQueryError,
};

#[derive(Clone)]
pub struct SiteSettingsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SiteSettingsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SiteSettingsQuery for SiteSettingsQueryPostgres {
    async fn find_active(&self) -> Result<Option<SiteSettingsView>, SiteSettingsQueryError> {
        let model = Entity::find()
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| SiteSettingsQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(model_to_view))
    }
}

pub(crate) fn model_to_view(m: site_settings::Model) -> SiteSettingsView {
    SiteSettingsView {
        site_title: m.site_title,
        site_description: m.site_description,
        favicon: m.favicon,
        logo: m.logo,
        meta_keywords: m.meta_keywords,
        google_analytics_id: m.google_analytics_id,
        primary_color: m.primary_color,
    }
}
