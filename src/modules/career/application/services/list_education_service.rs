use async_trait::async_trait;

use crate::modules::career::application::domain::entities::EducationView;
use crate::modules::career::application::ports::incoming::use_cases::{
    ListEducationError, ListEducationUseCase,
};
use crate::modules::career::application::ports::outgoing::CareerQuery;

#[derive(Debug, Clone)]
pub struct ListEducationService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListEducationService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListEducationUseCase for ListEducationService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EducationView>, ListEducationError> {
        Ok(self.query.list_education().await?)
    }
}
