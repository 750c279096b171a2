use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{CoreExpertiseView, PersonalInfoView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// The single active profile, if one exists.
    async fn find_active_personal_info(&self) -> Result<Option<PersonalInfoView>, ProfileQueryError>;

    /// Active core expertise items, `order` ascending.
    async fn list_core_expertise(&self) -> Result<Vec<CoreExpertiseView>, ProfileQueryError>;
}
