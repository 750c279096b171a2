use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectAction;
use crate::modules::project::application::ports::incoming::use_cases::{
    ApplyProjectActionError, ApplyProjectActionUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

#[derive(Debug, Clone)]
pub struct ApplyProjectActionService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> ApplyProjectActionService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ApplyProjectActionUseCase for ApplyProjectActionService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        action: ProjectAction,
        mut ids: Vec<Uuid>,
    ) -> Result<u64, ApplyProjectActionError> {
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(0);
        }

        self.repository
            .apply_action(action, &ids)
            .await
            .map_err(|e| ApplyProjectActionError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::{
        ProjectCategoryView, ProjectDetail,
    };
    use crate::modules::project::application::ports::outgoing::{
        CreateProjectCategoryData, CreateProjectData, ProjectRepositoryError,
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<(ProjectAction, Vec<Uuid>)>>,
    }

    #[async_trait]
    impl ProjectRepository for RecordingRepository {
        async fn create_category(
            &self,
            _data: CreateProjectCategoryData,
        ) -> Result<ProjectCategoryView, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn create_project(
            &self,
            _data: CreateProjectData,
        ) -> Result<ProjectDetail, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn apply_action(
            &self,
            action: ProjectAction,
            ids: &[Uuid],
        ) -> Result<u64, ProjectRepositoryError> {
            self.calls.lock().unwrap().push((action, ids.to_vec()));
            Ok(ids.len() as u64)
        }
    }

    #[tokio::test]
    async fn duplicate_ids_are_sent_once() {
        let id = Uuid::now_v7();
        let service = ApplyProjectActionService::new(RecordingRepository::default());

        let updated = service
            .execute(ProjectAction::MarkFeatured, vec![id, id])
            .await
            .unwrap();

        assert_eq!(updated, 1);
        let calls = service.repository.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), [(ProjectAction::MarkFeatured, vec![id])]);
    }

    #[tokio::test]
    async fn empty_selection_skips_the_store() {
        let service = ApplyProjectActionService::new(RecordingRepository::default());

        let updated = service.execute(ProjectAction::Deactivate, vec![]).await.unwrap();

        assert_eq!(updated, 0);
        assert!(service.repository.calls.lock().unwrap().is_empty());
    }
}
