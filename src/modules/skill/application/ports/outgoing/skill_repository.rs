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
pub enum SkillRepositoryError {
    NotFound,
    DatabaseError(String),
    SerializationError(String),
}

impl fmt::Display for SkillRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillRepositoryError::NotFound => write!(f, "skill not found"),
            SkillRepositoryError::DatabaseError(msg) => write!(f, "database error: {}", msg),
            SkillRepositoryError::SerializationError(msg) => {
                write!(f, "serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SkillRepositoryError {}

//
// ──────────────────────────────────────────────────────────
// Data
// ──────────────────────────────────────────────────────────
//

/// Display grouping on the public skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    #[serde(rename = "Tools & Others")]
    ToolsAndOthers,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::ToolsAndOthers => "Tools & Others",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Frontend" => Some(SkillCategory::Frontend),
            "Backend" => Some(SkillCategory::Backend),
            "Database" => Some(SkillCategory::Database),
            "Tools & Others" => Some(SkillCategory::ToolsAndOthers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    /// 0-100
    pub proficiency: i32,
    pub icon: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: i32,
    pub icon: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSkillData {
    pub name: PatchField<String>,
    pub category: PatchField<SkillCategory>,
    pub proficiency: PatchField<i32>,
    pub icon: PatchField<String>,
    pub display_order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Repository port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError>;

    async fn find_skill(&self, id: Uuid) -> Result<SkillRecord, SkillRepositoryError>;

    async fn create_skill(&self, data: CreateSkillData)
        -> Result<SkillRecord, SkillRepositoryError>;

    async fn update_skill(
        &self,
        id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, SkillRepositoryError>;

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillRepositoryError>;
}
