use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectCategoryView;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCategoryCommand, CreateProjectCategoryError, CreateProjectCategoryUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateProjectCategoryService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateProjectCategoryService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectCategoryUseCase for CreateProjectCategoryService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCategoryCommand,
    ) -> Result<ProjectCategoryView, CreateProjectCategoryError> {
        self.repository
            .create_category(command.into_data())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugTaken => CreateProjectCategoryError::SlugTaken,
                other => CreateProjectCategoryError::RepositoryError(other.to_string()),
            })
    }
}
