use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ExperienceRepositoryError {
    NotFound,
    DatabaseError(String),
    SerializationError(String),
}

impl fmt::Display for ExperienceRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceRepositoryError::NotFound => write!(f, "experience not found"),
            ExperienceRepositoryError::DatabaseError(msg) => write!(f, "database error: {}", msg),
            ExperienceRepositoryError::SerializationError(msg) => {
                write!(f, "serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ExperienceRepositoryError {}

//
// ──────────────────────────────────────────────────────────
// Data
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    Job,
    Internship,
    Freelance,
    Education,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Job => "job",
            ExperienceType::Internship => "internship",
            ExperienceType::Freelance => "freelance",
            ExperienceType::Education => "education",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "job" => Some(ExperienceType::Job),
            "internship" => Some(ExperienceType::Internship),
            "freelance" => Some(ExperienceType::Freelance),
            "education" => Some(ExperienceType::Education),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// Free text, e.g. "Jan 2023 - Present".
    pub period: String,
    /// Ordered bullet points.
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub experience_type: ExperienceType,
    pub is_current: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateExperienceData {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub experience_type: ExperienceType,
    pub is_current: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExperienceData {
    pub title: PatchField<String>,
    pub company: PatchField<String>,
    pub location: PatchField<String>,
    pub period: PatchField<String>,
    pub description: PatchField<Vec<String>>,
    pub technologies: PatchField<Vec<String>>,
    pub experience_type: PatchField<ExperienceType>,
    pub is_current: PatchField<bool>,
    pub display_order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Repository port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn list_experiences(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError>;

    async fn find_experience(
        &self,
        id: Uuid,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn update_experience(
        &self,
        id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_type_round_trips() {
        for t in [
            ExperienceType::Job,
            ExperienceType::Internship,
            ExperienceType::Freelance,
            ExperienceType::Education,
        ] {
            assert_eq!(ExperienceType::parse(t.as_str()), Some(t));
        }
        assert_eq!(ExperienceType::parse("sabbatical"), None);
    }
}
