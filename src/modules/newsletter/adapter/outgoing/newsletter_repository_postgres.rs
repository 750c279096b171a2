use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::newsletter::adapter::outgoing::sea_orm_entity::newsletter_subscribers;
use crate::modules::newsletter::application::domain::entities::Subscriber;
use crate::modules::newsletter::application::ports::outgoing::{
    NewsletterRepository, NewsletterRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone)]
pub struct NewsletterRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsletterRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsletterRepository for NewsletterRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, NewsletterRepositoryError> {
        let row = newsletter_subscribers::Entity::find()
            .filter(newsletter_subscribers::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_subscriber))
    }

    async fn create(&self, email: &str) -> Result<Subscriber, NewsletterRepositoryError> {
        let model = newsletter_subscribers::ActiveModel {
            id: Set(Uuid::now_v7()),
            email: Set(email.to_string()),
            is_active: Set(true),
            subscribed_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                NewsletterRepositoryError::AlreadySubscribed
            } else {
                map_db_err(e)
            }
        })?;

        Ok(model_to_subscriber(inserted))
    }

    async fn reactivate(&self, id: Uuid) -> Result<bool, NewsletterRepositoryError> {
        let result = newsletter_subscribers::Entity::update_many()
            .col_expr(newsletter_subscribers::Column::IsActive, Expr::value(true))
            .filter(newsletter_subscribers::Column::Id.eq(id))
            .filter(newsletter_subscribers::Column::IsActive.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn set_active(&self, ids: &[Uuid], is_active: bool) -> Result<u64, NewsletterRepositoryError> {
        let result = newsletter_subscribers::Entity::update_many()
            .col_expr(newsletter_subscribers::Column::IsActive, Expr::value(is_active))
            .filter(newsletter_subscribers::Column::Id.is_in(ids.iter().copied()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

fn model_to_subscriber(m: newsletter_subscribers::Model) -> Subscriber {
    Subscriber {
        id: m.id,
        email: m.email,
        is_active: m.is_active,
        subscribed_at: m.subscribed_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> NewsletterRepositoryError {
    NewsletterRepositoryError::DatabaseError(e.to_string())
}
