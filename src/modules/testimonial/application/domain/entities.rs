use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TestimonialView {
    pub id: Uuid,
    pub client_name: String,
    pub client_position: String,
    pub client_company: String,
    /// Stored image reference, if any.
    pub client_photo: Option<String>,
    pub testimonial: String,
    /// 1 to 5.
    #[schema(minimum = 1, maximum = 5)]
    pub rating: i16,
    pub order: i32,
}
