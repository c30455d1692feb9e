use async_trait::async_trait;
use std::fmt;

use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectRecord, ProjectRepository,
};

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    EmptyTitle,
    EmptyDescription,
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::EmptyTitle => write!(f, "title is required"),
            CreateProjectError::EmptyDescription => write!(f, "description is required"),
            CreateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ICreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<ProjectRecord, CreateProjectError>;
}

pub struct CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateProjectUseCase for CreateProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: CreateProjectData) -> Result<ProjectRecord, CreateProjectError> {
        if data.title.trim().is_empty() {
            return Err(CreateProjectError::EmptyTitle);
        }
        if data.description.trim().is_empty() {
            return Err(CreateProjectError::EmptyDescription);
        }

        self.repository
            .create_project(data)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}
