use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{ProjectFilter, ProjectListItem};
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[derive(Debug, Clone)]
pub struct ListProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListProjectsUseCase for ListProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, mut filter: ProjectFilter) -> Result<Vec<ProjectListItem>, ListProjectsError> {
        // Blank parameters behave as if absent.
        filter.category_slug = filter
            .category_slug
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        filter.search = filter
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(self.query.list_projects(&filter).await?)
    }
}
