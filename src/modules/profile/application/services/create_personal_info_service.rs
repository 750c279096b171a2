use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfoView;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreatePersonalInfoCommand, CreatePersonalInfoError, CreatePersonalInfoUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreatePersonalInfoService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePersonalInfoService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePersonalInfoUseCase for CreatePersonalInfoService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreatePersonalInfoCommand,
    ) -> Result<PersonalInfoView, CreatePersonalInfoError> {
        self.repository
            .create_personal_info(command.into_data())
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::SingletonViolation => CreatePersonalInfoError::AlreadyExists,
                other => CreatePersonalInfoError::RepositoryError(other.to_string()),
            })
    }
}
