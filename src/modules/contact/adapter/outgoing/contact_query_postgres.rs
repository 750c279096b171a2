use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages;
use crate::modules::contact::application::domain::entities::ContactMessageView;
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactQueryError};

#[derive(Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list_messages(&self) -> Result<Vec<ContactMessageView>, ContactQueryError> {
        let rows = contact_messages::Entity::find()
            .order_by_desc(contact_messages::Column::CreatedAt)
            .order_by_desc(contact_messages::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e: DbErr| ContactQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(model_to_view).collect())
    }
}

pub(crate) fn model_to_view(m: contact_messages::Model) -> ContactMessageView {
    ContactMessageView {
        id: m.id,
        name: m.name,
        email: m.email,
        subject: m.subject,
        message: m.message,
        is_read: m.is_read,
        created_at: m.created_at.with_timezone(&Utc),
    }
}
