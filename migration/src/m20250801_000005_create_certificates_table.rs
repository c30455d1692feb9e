use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Certificates::Title).text().not_null())
                    .col(ColumnDef::new(Certificates::Issuer).text().not_null())
                    .col(
                        ColumnDef::new(Certificates::IssueDate)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Certificates::CredentialUrl).text())
                    .col(ColumnDef::new(Certificates::ImageUrl).text())
                    .col(
                        ColumnDef::new(Certificates::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Certificates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Certificates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certificates {
    Table,
    Id,
    Title,
    Issuer,
    IssueDate,
    CredentialUrl,
    ImageUrl,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
