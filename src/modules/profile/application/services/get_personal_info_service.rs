use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfoView;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetPersonalInfoError, GetPersonalInfoUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

#[derive(Debug, Clone)]
pub struct GetPersonalInfoService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPersonalInfoService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPersonalInfoUseCase for GetPersonalInfoService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<PersonalInfoView, GetPersonalInfoError> {
        self.query
            .find_active_personal_info()
            .await?
            .ok_or(GetPersonalInfoError::NotFound)
    }
}
