use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessageAction;
use crate::modules::newsletter::application::domain::entities::SubscriberAction;
use crate::modules::project::application::domain::entities::ProjectAction;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectActionRequest {
    pub action: ProjectAction,
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactMessageActionRequest {
    pub action: ContactMessageAction,
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscriberActionRequest {
    pub action: SubscriberAction,
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResult {
    /// Rows actually changed.
    pub updated: u64,
}
