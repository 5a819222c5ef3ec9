use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(pk_uuid(Author::Id))
                    .col(string_len(Author::FirstName, 50))
                    .col(string_len(Author::LastName, 50))
                    .col(timestamp_with_time_zone(Author::DateOfBirth))
                    .col(string_len(Author::MainCategory, 50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Author {
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    MainCategory,
}
