use async_trait::async_trait;
use std::fmt;

use crate::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceRecord, ExperienceRepository,
};

#[derive(Debug, Clone)]
pub enum CreateExperienceError {
    EmptyTitle,
    EmptyCompany,
    RepositoryError(String),
}

impl fmt::Display for CreateExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateExperienceError::EmptyTitle => write!(f, "title is required"),
            CreateExperienceError::EmptyCompany => write!(f, "company is required"),
            CreateExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ICreateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, CreateExperienceError>;
}

pub struct CreateExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> CreateExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateExperienceUseCase for CreateExperienceUseCase<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, CreateExperienceError> {
        if data.title.trim().is_empty() {
            return Err(CreateExperienceError::EmptyTitle);
        }
        if data.company.trim().is_empty() {
            return Err(CreateExperienceError::EmptyCompany);
        }

        self.repository
            .create_experience(data)
            .await
            .map_err(|e| CreateExperienceError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experience::application::ports::outgoing::{
        ExperienceRepositoryError, ExperienceType, UpdateExperienceData,
    };
    use chrono::Utc;
    use uuid::Uuid;

    struct MockExperienceRepository;

    #[async_trait]
    impl ExperienceRepository for MockExperienceRepository {
        async fn list_experiences(
            &self,
        ) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
            unimplemented!("not used in create tests")
        }

        async fn find_experience(
            &self,
            _id: Uuid,
        ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
            unimplemented!("not used in create tests")
        }

        async fn create_experience(
            &self,
            data: CreateExperienceData,
        ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
            let now = Utc::now();
            Ok(ExperienceRecord {
                id: Uuid::new_v4(),
                title: data.title,
                company: data.company,
                location: data.location,
                period: data.period,
                description: data.description,
                technologies: data.technologies,
                experience_type: data.experience_type,
                is_current: data.is_current,
                display_order: data.display_order,
                created_at: now,
                updated_at: now,
            })
        }

        async fn update_experience(
            &self,
            _id: Uuid,
            _data: UpdateExperienceData,
        ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
            unimplemented!("not used in create tests")
        }

        async fn delete_experience(&self, _id: Uuid) -> Result<(), ExperienceRepositoryError> {
            unimplemented!("not used in create tests")
        }
    }

    fn data(title: &str, company: &str) -> CreateExperienceData {
        CreateExperienceData {
            title: title.to_string(),
            company: company.to_string(),
            location: Some("Remote".to_string()),
            period: "Jan 2023 - Present".to_string(),
            description: vec!["Built things".to_string()],
            technologies: vec!["Rust".to_string()],
            experience_type: ExperienceType::Job,
            is_current: true,
            display_order: 0,
        }
    }

    #[tokio::test]
    async fn creates_a_valid_experience() {
        let use_case = CreateExperienceUseCase::new(MockExperienceRepository);
        let created = use_case.execute(data("Engineer", "Acme")).await.unwrap();

        assert_eq!(created.company, "Acme");
        assert_eq!(created.experience_type, ExperienceType::Job);
        assert_eq!(created.description, vec!["Built things".to_string()]);
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let use_case = CreateExperienceUseCase::new(MockExperienceRepository);
        assert!(matches!(
            use_case.execute(data(" ", "Acme")).await,
            Err(CreateExperienceError::EmptyTitle)
        ));
    }

    #[tokio::test]
    async fn empty_company_is_rejected() {
        let use_case = CreateExperienceUseCase::new(MockExperienceRepository);
        assert!(matches!(
            use_case.execute(data("Engineer", " ")).await,
            Err(CreateExperienceError::EmptyCompany)
        ));
    }
}
