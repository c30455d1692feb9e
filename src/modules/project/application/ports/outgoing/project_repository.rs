use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ProjectRepositoryError {
    NotFound,
    DatabaseError(String),
    SerializationError(String),
}

impl fmt::Display for ProjectRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectRepositoryError::NotFound => write!(f, "project not found"),
            ProjectRepositoryError::DatabaseError(msg) => write!(f, "database error: {}", msg),
            ProjectRepositoryError::SerializationError(msg) => {
                write!(f, "serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ProjectRepositoryError {}

//
// ──────────────────────────────────────────────────────────
// Data
// ──────────────────────────────────────────────────────────
//

/// Canonical project row as stored.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub display_order: i32,
}

/// Partial update. Non-nullable columns only change on `Value`; nullable
/// columns are cleared on `Null`.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub image_url: PatchField<String>,
    pub tech_stack: PatchField<Vec<String>>,
    pub github_url: PatchField<String>,
    pub live_url: PatchField<String>,
    pub featured: PatchField<bool>,
    pub display_order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Repository port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All rows, `display_order` ascending; equal orders keep insertion order.
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;

    async fn find_project(&self, id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn update_project(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
