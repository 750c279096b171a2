use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::CoreExpertiseView;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetCoreExpertiseError, GetCoreExpertiseUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

#[derive(Debug, Clone)]
pub struct GetCoreExpertiseService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCoreExpertiseService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCoreExpertiseUseCase for GetCoreExpertiseService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CoreExpertiseView>, GetCoreExpertiseError> {
        Ok(self.query.list_core_expertise().await?)
    }
}
