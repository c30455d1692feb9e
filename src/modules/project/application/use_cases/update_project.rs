use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::project::application::ports::outgoing::{
    ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

#[derive(Debug, Clone)]
pub enum UpdateProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectError::NotFound => write!(f, "project not found"),
            UpdateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}

pub struct UpdateProjectUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> UpdateProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProjectUseCase for UpdateProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        self.repository
            .update_project(id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })
    }
}
