mod project_query;
mod project_repository;

pub use project_query::{ProjectQuery, ProjectQueryError};
pub use project_repository::{
    CreateProjectCategoryData, CreateProjectData, ProjectRepository, ProjectRepositoryError,
};
