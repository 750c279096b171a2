use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectCategoryView;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectCategoriesError, ListProjectCategoriesUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[derive(Debug, Clone)]
pub struct ListProjectCategoriesService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListProjectCategoriesService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListProjectCategoriesUseCase for ListProjectCategoriesService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectCategoryView>, ListProjectCategoriesError> {
        Ok(self.query.list_categories().await?)
    }
}
