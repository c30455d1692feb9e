use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Singleton tables: a fixed smallint primary key (always 1) gives the
// application's upsert a unique target, so a second row cannot exist.

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfileSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfileSettings::Id)
                            .small_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProfileSettings::HeroTitle).text())
                    .col(ColumnDef::new(ProfileSettings::HeroSubtitle).text())
                    .col(ColumnDef::new(ProfileSettings::AboutText).text())
                    .col(ColumnDef::new(ProfileSettings::FooterText).text())
                    .col(ColumnDef::new(ProfileSettings::GithubUrl).text())
                    .col(ColumnDef::new(ProfileSettings::LinkedinUrl).text())
                    .col(ColumnDef::new(ProfileSettings::TwitterUrl).text())
                    .col(ColumnDef::new(ProfileSettings::ContactEmail).text())
                    .col(ColumnDef::new(ProfileSettings::YearsExperience).text())
                    .col(ColumnDef::new(ProfileSettings::ProjectsCompleted).text())
                    .col(ColumnDef::new(ProfileSettings::HappyClients).text())
                    .col(ColumnDef::new(ProfileSettings::AvatarUrl).text())
                    .col(ColumnDef::new(ProfileSettings::HeroBackgroundUrl).text())
                    .col(ColumnDef::new(ProfileSettings::AboutImageUrl).text())
                    .col(ColumnDef::new(ProfileSettings::CareerGoals).json_binary())
                    .col(
                        ColumnDef::new(ProfileSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResumeSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResumeSettings::Id)
                            .small_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResumeSettings::FileUrl).text())
                    .col(ColumnDef::new(ResumeSettings::FileName).text())
                    .col(
                        ColumnDef::new(ResumeSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NotificationSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NotificationSettings::Id)
                            .small_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NotificationSettings::NotificationEmail).text())
                    .col(
                        ColumnDef::new(NotificationSettings::SendConfirmationEmail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(NotificationSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResumeSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfileSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProfileSettings {
    Table,
    Id,
    HeroTitle,
    HeroSubtitle,
    AboutText,
    FooterText,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    ContactEmail,
    YearsExperience,
    ProjectsCompleted,
    HappyClients,
    AvatarUrl,
    HeroBackgroundUrl,
    AboutImageUrl,
    CareerGoals,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ResumeSettings {
    Table,
    Id,
    FileUrl,
    FileName,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum NotificationSettings {
    Table,
    Id,
    NotificationEmail,
    SendConfirmationEmail,
    UpdatedAt,
}
