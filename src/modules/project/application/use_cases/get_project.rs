use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::project::application::ports::outgoing::{
    ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone)]
pub enum GetProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectError::NotFound => write!(f, "project not found"),
            GetProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ProjectRecord, GetProjectError>;
}

pub struct GetProjectUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetProjectUseCase for GetProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ProjectRecord, GetProjectError> {
        self.repository.find_project(id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => GetProjectError::NotFound,
            other => GetProjectError::RepositoryError(other.to_string()),
        })
    }
}
