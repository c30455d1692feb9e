use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProjectError::NotFound => write!(f, "project not found"),
            DeleteProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError>;
}

pub struct DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteProjectUseCase for DeleteProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        self.repository
            .delete_project(id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
                other => DeleteProjectError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::application::use_cases::test_support::{
        sample_create_data, InMemoryProjectRepository,
    };

    #[tokio::test]
    async fn deletes_only_the_matching_row() {
        let repo = InMemoryProjectRepository::default();
        let keep = repo.create_project(sample_create_data("keep", 0)).await.unwrap();
        let gone = repo.create_project(sample_create_data("gone", 1)).await.unwrap();

        let use_case = DeleteProjectUseCase::new(repo);
        use_case.execute(gone.id).await.unwrap();

        let remaining = use_case.repository.list_projects().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }

    #[tokio::test]
    async fn deleting_unknown_id_reports_not_found_and_keeps_rows() {
        let repo = InMemoryProjectRepository::default();
        repo.create_project(sample_create_data("keep", 0)).await.unwrap();

        let use_case = DeleteProjectUseCase::new(repo);
        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteProjectError::NotFound)));
        assert_eq!(use_case.repository.list_projects().await.unwrap().len(), 1);
    }
}
