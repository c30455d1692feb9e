use async_trait::async_trait;
use chrono::Utc;

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::settings::adapter::outgoing::sea_orm_entity::{
    notification_settings, profile_settings, resume_settings, SINGLETON_ID,
};
use crate::settings::application::ports::outgoing::{
    NotificationSettingsRecord, NotificationSettingsRepository, ProfileSettingsRecord,
    ProfileSettingsRepository, ResumeSettingsRecord, ResumeSettingsRepository,
    SettingsRepositoryError, UpdateNotificationSettingsData, UpdateProfileSettingsData,
    UpdateResumeSettingsData,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone)]
pub struct ProfileSettingsPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileSettingsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileSettingsRepository for ProfileSettingsPostgres {
    async fn get(&self) -> Result<Option<ProfileSettingsRecord>, SettingsRepositoryError> {
        let row = profile_settings::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(profile_model_to_record).transpose()
    }

    async fn upsert(
        &self,
        data: UpdateProfileSettingsData,
    ) -> Result<ProfileSettingsRecord, SettingsRepositoryError> {
        use profile_settings::{ActiveModel, Column, Entity};

        let mut model = ActiveModel {
            id: Set(SINGLETON_ID),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        // The conflict clause only touches columns the caller actually sent,
        // so a partial write never clobbers fields it did not mention.
        let mut update_columns = vec![Column::UpdatedAt];

        if !data.hero_title.is_unset() {
            model.hero_title = Set(data.hero_title.into_option());
            update_columns.push(Column::HeroTitle);
        }
        if !data.hero_subtitle.is_unset() {
            model.hero_subtitle = Set(data.hero_subtitle.into_option());
            update_columns.push(Column::HeroSubtitle);
        }
        if !data.about_text.is_unset() {
            model.about_text = Set(data.about_text.into_option());
            update_columns.push(Column::AboutText);
        }
        if !data.footer_text.is_unset() {
            model.footer_text = Set(data.footer_text.into_option());
            update_columns.push(Column::FooterText);
        }
        if !data.github_url.is_unset() {
            model.github_url = Set(data.github_url.into_option());
            update_columns.push(Column::GithubUrl);
        }
        if !data.linkedin_url.is_unset() {
            model.linkedin_url = Set(data.linkedin_url.into_option());
            update_columns.push(Column::LinkedinUrl);
        }
        if !data.twitter_url.is_unset() {
            model.twitter_url = Set(data.twitter_url.into_option());
            update_columns.push(Column::TwitterUrl);
        }
        if !data.contact_email.is_unset() {
            model.contact_email = Set(data.contact_email.into_option());
            update_columns.push(Column::ContactEmail);
        }
        if !data.years_experience.is_unset() {
            model.years_experience = Set(data.years_experience.into_option());
            update_columns.push(Column::YearsExperience);
        }
        if !data.projects_completed.is_unset() {
            model.projects_completed = Set(data.projects_completed.into_option());
            update_columns.push(Column::ProjectsCompleted);
        }
        if !data.happy_clients.is_unset() {
            model.happy_clients = Set(data.happy_clients.into_option());
            update_columns.push(Column::HappyClients);
        }
        if !data.avatar_url.is_unset() {
            model.avatar_url = Set(data.avatar_url.into_option());
            update_columns.push(Column::AvatarUrl);
        }
        if !data.hero_background_url.is_unset() {
            model.hero_background_url = Set(data.hero_background_url.into_option());
            update_columns.push(Column::HeroBackgroundUrl);
        }
        if !data.about_image_url.is_unset() {
            model.about_image_url = Set(data.about_image_url.into_option());
            update_columns.push(Column::AboutImageUrl);
        }

        match data.career_goals {
            PatchField::Unset => {}
            PatchField::Null => {
                model.career_goals = Set(None);
                update_columns.push(Column::CareerGoals);
            }
            PatchField::Value(goals) => {
                let json = serde_json::to_value(goals)
                    .map_err(|e| SettingsRepositoryError::SerializationError(e.to_string()))?;
                model.career_goals = Set(Some(json));
                update_columns.push(Column::CareerGoals);
            }
        }

        let result = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        profile_model_to_record(result)
    }
}

fn profile_model_to_record(
    model: profile_settings::Model,
) -> Result<ProfileSettingsRecord, SettingsRepositoryError> {
    let career_goals = match model.career_goals {
        Some(json) => serde_json::from_value::<Vec<String>>(json)
            .map_err(|e| SettingsRepositoryError::SerializationError(e.to_string()))?,
        None => Vec::new(),
    };

    Ok(ProfileSettingsRecord {
        hero_title: model.hero_title,
        hero_subtitle: model.hero_subtitle,
        about_text: model.about_text,
        footer_text: model.footer_text,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        twitter_url: model.twitter_url,
        contact_email: model.contact_email,
        years_experience: model.years_experience,
        projects_completed: model.projects_completed,
        happy_clients: model.happy_clients,
        avatar_url: model.avatar_url,
        hero_background_url: model.hero_background_url,
        about_image_url: model.about_image_url,
        career_goals,
        updated_at: Some(model.updated_at.to_utc()),
    })
}

// ============================================================================
// Resume
// ============================================================================

#[derive(Clone)]
pub struct ResumeSettingsPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeSettingsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeSettingsRepository for ResumeSettingsPostgres {
    async fn get(&self) -> Result<Option<ResumeSettingsRecord>, SettingsRepositoryError> {
        let row = resume_settings::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(resume_model_to_record))
    }

    async fn upsert(
        &self,
        data: UpdateResumeSettingsData,
    ) -> Result<ResumeSettingsRecord, SettingsRepositoryError> {
        use resume_settings::{ActiveModel, Column, Entity};

        let mut model = ActiveModel {
            id: Set(SINGLETON_ID),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        let mut update_columns = vec![Column::UpdatedAt];

        match data.file_url {
            PatchField::Unset => {}
            PatchField::Null => {
                model.file_url = Set(None);
                update_columns.push(Column::FileUrl);
            }
            PatchField::Value(v) => {
                model.file_url = Set(Some(v));
                update_columns.push(Column::FileUrl);
            }
        }
        match data.file_name {
            PatchField::Unset => {}
            PatchField::Null => {
                model.file_name = Set(None);
                update_columns.push(Column::FileName);
            }
            PatchField::Value(v) => {
                model.file_name = Set(Some(v));
                update_columns.push(Column::FileName);
            }
        }

        let result = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(resume_model_to_record(result))
    }
}

fn resume_model_to_record(model: resume_settings::Model) -> ResumeSettingsRecord {
    ResumeSettingsRecord {
        file_url: model.file_url,
        file_name: model.file_name,
        updated_at: Some(model.updated_at.to_utc()),
    }
}

// ============================================================================
// Notification
// ============================================================================

#[derive(Clone)]
pub struct NotificationSettingsPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationSettingsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationSettingsRepository for NotificationSettingsPostgres {
    async fn get(&self) -> Result<Option<NotificationSettingsRecord>, SettingsRepositoryError> {
        let row = notification_settings::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(notification_model_to_record))
    }

    async fn upsert(
        &self,
        data: UpdateNotificationSettingsData,
    ) -> Result<NotificationSettingsRecord, SettingsRepositoryError> {
        use notification_settings::{ActiveModel, Column, Entity};

        let mut model = ActiveModel {
            id: Set(SINGLETON_ID),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        let mut update_columns = vec![Column::UpdatedAt];

        match data.notification_email {
            PatchField::Unset => {}
            PatchField::Null => {
                model.notification_email = Set(None);
                update_columns.push(Column::NotificationEmail);
            }
            PatchField::Value(v) => {
                model.notification_email = Set(Some(v));
                update_columns.push(Column::NotificationEmail);
            }
        }
        if let PatchField::Value(flag) = data.send_confirmation_email {
            model.send_confirmation_email = Set(flag);
            update_columns.push(Column::SendConfirmationEmail);
        }

        let result = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(notification_model_to_record(result))
    }
}

fn notification_model_to_record(
    model: notification_settings::Model,
) -> NotificationSettingsRecord {
    NotificationSettingsRecord {
        notification_email: model.notification_email,
        send_confirmation_email: model.send_confirmation_email,
        updated_at: Some(model.updated_at.to_utc()),
    }
}

fn map_db_err(e: sea_orm::DbErr) -> SettingsRepositoryError {
    SettingsRepositoryError::DatabaseError(e.to_string())
}
