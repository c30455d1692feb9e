use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
use crate::shared::patch::PatchField;

/// In-memory repository used across the project use-case tests. Keeps
/// insertion order so tie behavior on `display_order` is observable.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    pub rows: Mutex<Vec<ProjectRecord>>,
    pub fail: bool,
}

impl InMemoryProjectRepository {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn guard(&self) -> Result<(), ProjectRepositoryError> {
        if self.fail {
            Err(ProjectRepositoryError::DatabaseError("db down".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|r| r.display_order);
        Ok(rows)
    }

    async fn find_project(&self, id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.guard()?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.guard()?;
        let now = Utc::now();
        let record = ProjectRecord {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            image_url: data.image_url,
            tech_stack: data.tech_stack,
            github_url: data.github_url,
            live_url: data.live_url,
            featured: data.featured,
            display_order: data.display_order,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_project(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let PatchField::Value(v) = data.title {
            row.title = v;
        }
        if let PatchField::Value(v) = data.description {
            row.description = v;
        }
        match data.image_url {
            PatchField::Unset => {}
            PatchField::Null => row.image_url = None,
            PatchField::Value(v) => row.image_url = Some(v),
        }
        if let PatchField::Value(v) = data.tech_stack {
            row.tech_stack = v;
        }
        match data.github_url {
            PatchField::Unset => {}
            PatchField::Null => row.github_url = None,
            PatchField::Value(v) => row.github_url = Some(v),
        }
        match data.live_url {
            PatchField::Unset => {}
            PatchField::Null => row.live_url = None,
            PatchField::Value(v) => row.live_url = Some(v),
        }
        if let PatchField::Value(v) = data.featured {
            row.featured = v;
        }
        if let PatchField::Value(v) = data.display_order {
            row.display_order = v;
        }
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

pub fn sample_create_data(title: &str, display_order: i32) -> CreateProjectData {
    CreateProjectData {
        title: title.to_string(),
        description: "A project".to_string(),
        image_url: None,
        tech_stack: vec!["Rust".to_string()],
        github_url: Some("https://github.com/x/y".to_string()),
        live_url: None,
        featured: false,
        display_order,
    }
}
