// src/modules/profile/adapter/outgoing/profile_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{core_expertise, personal_info};
use crate::modules::profile::application::domain::entities::{CoreExpertiseView, PersonalInfoView};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_active_personal_info(&self) -> Result<Option<PersonalInfoView>, ProfileQueryError> {
        let model = personal_info::Entity::find()
            .filter(personal_info::Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(personal_info_to_view))
    }

    async fn list_core_expertise(&self) -> Result<Vec<CoreExpertiseView>, ProfileQueryError> {
        let models = core_expertise::Entity::find()
            .filter(core_expertise::Column::IsActive.eq(true))
            .order_by_asc(core_expertise::Column::SortOrder)
            .order_by_asc(core_expertise::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| CoreExpertiseView {
                id: m.id,
                title: m.title,
                icon_name: m.icon_name,
                order: m.sort_order,
            })
            .collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn personal_info_to_view(m: personal_info::Model) -> PersonalInfoView {
    PersonalInfoView {
        name: m.name,
        title: m.title,
        tagline: m.tagline,
        hero_description: m.hero_description,
        about_heading: m.about_heading,
        about_description: m.about_description,
        about_detail: m.about_detail,
        email: m.email,
        phone: m.phone,
        location: m.location,
        availability_status: m.availability_status,
        years_experience: m.years_experience,
        projects_completed: m.projects_completed,
        awards_won: m.awards_won,
        happy_clients: m.happy_clients,
        linkedin_url: m.linkedin_url,
        github_url: m.github_url,
        twitter_url: m.twitter_url,
        dribbble_url: m.dribbble_url,
        resume_pdf: m.resume_pdf,
        footer_tagline: m.footer_tagline,
        copyright_text: m.copyright_text,
    }
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}
