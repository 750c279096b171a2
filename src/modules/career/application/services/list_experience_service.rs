use async_trait::async_trait;

use crate::modules::career::application::domain::entities::ExperienceView;
use crate::modules::career::application::ports::incoming::use_cases::{
    ListExperienceError, ListExperienceUseCase,
};
use crate::modules::career::application::ports::outgoing::CareerQuery;

#[derive(Debug, Clone)]
pub struct ListExperienceService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListExperienceService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListExperienceUseCase for ListExperienceService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ExperienceView>, ListExperienceError> {
        Ok(self.query.list_experience().await?)
    }
}
