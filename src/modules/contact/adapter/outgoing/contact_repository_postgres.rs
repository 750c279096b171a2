use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::contact_query_postgres::model_to_view;
use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages;
use crate::modules::contact::application::domain::entities::ContactMessageView;
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, NewContactMessage,
};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn save(&self, message: NewContactMessage) -> Result<ContactMessageView, ContactRepositoryError> {
        let model = contact_messages::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(message.name),
            email: Set(message.email),
            subject: Set(message.subject),
            message: Set(message.message),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_view(inserted))
    }

    async fn set_read(&self, ids: &[Uuid], is_read: bool) -> Result<u64, ContactRepositoryError> {
        let result = contact_messages::Entity::update_many()
            .col_expr(contact_messages::Column::IsRead, Expr::value(is_read))
            .filter(contact_messages::Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
