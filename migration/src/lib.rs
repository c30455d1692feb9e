pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_users_table;
mod m20250801_000002_create_projects_table;
mod m20250801_000003_create_skills_table;
mod m20250801_000004_create_experiences_table;
mod m20250801_000005_create_certificates_table;
mod m20250801_000006_create_settings_tables;
mod m20250801_000007_create_contact_submissions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users_table::Migration),
            Box::new(m20250801_000002_create_projects_table::Migration),
            Box::new(m20250801_000003_create_skills_table::Migration),
            Box::new(m20250801_000004_create_experiences_table::Migration),
            Box::new(m20250801_000005_create_certificates_table::Migration),
            Box::new(m20250801_000006_create_settings_tables::Migration),
            Box::new(m20250801_000007_create_contact_submissions_table::Migration),
        ]
    }
}
