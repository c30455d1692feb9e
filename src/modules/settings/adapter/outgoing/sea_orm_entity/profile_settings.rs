use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i16,

    #[sea_orm(column_type = "Text", nullable)]
    pub hero_title: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub hero_subtitle: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub about_text: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub footer_text: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub twitter_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub contact_email: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub years_experience: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub projects_completed: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub happy_clients: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub avatar_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub hero_background_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub about_image_url: Option<String>,

    // Serialized list of strings
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub career_goals: Option<Json>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
