use async_trait::async_trait;
use std::fmt;

use crate::project::application::ports::outgoing::{
    ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone)]
pub enum ListProjectsError {
    RepositoryError(String),
}

impl fmt::Display for ListProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListProjectsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ListProjectsError>;
}

pub struct ListProjectsUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ListProjectsUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListProjectsUseCase for ListProjectsUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ListProjectsError> {
        self.repository
            .list_projects()
            .await
            .map_err(|e| ListProjectsError::RepositoryError(e.to_string()))
    }
}
