use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectDetail;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::formatting::normalize_slug;

#[derive(Debug, Clone)]
pub struct GetProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectUseCase for GetProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ProjectDetail, GetProjectError> {
        let slug = normalize_slug(slug);
        if slug.is_empty() {
            return Err(GetProjectError::NotFound);
        }

        self.query
            .find_by_slug(&slug)
            .await?
            .ok_or(GetProjectError::NotFound)
    }
}
