use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::testimonial::adapter::outgoing::sea_orm_entity::testimonials;
use crate::modules::testimonial::application::domain::entities::TestimonialView;
use crate::modules::testimonial::application::ports::outgoing::{
    TestimonialQuery, TestimonialQueryError,
};

#[derive(Clone)]
pub struct TestimonialQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialQuery for TestimonialQueryPostgres {
    async fn list_testimonials(&self) -> Result<Vec<TestimonialView>, TestimonialQueryError> {
        let rows = testimonials::Entity::find()
            .filter(testimonials::Column::IsActive.eq(true))
            .order_by_asc(testimonials::Column::SortOrder)
            .order_by_desc(testimonials::Column::CreatedAt)
            .order_by_desc(testimonials::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e: DbErr| TestimonialQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|m| TestimonialView {
                id: m.id,
                client_name: m.client_name,
                client_position: m.client_position,
                client_company: m.client_company,
                client_photo: m.client_photo,
                testimonial: m.testimonial,
                rating: m.rating,
                order: m.sort_order,
            })
            .collect())
    }
}
