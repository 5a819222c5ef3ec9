use sea_orm_migration::{prelude::*, schema::*};

use super::m20261012_000001_create_author_table::Author;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_uuid(Course::Id))
                    .col(uuid(Course::AuthorId))
                    .col(string_len(Course::Title, 100))
                    .col(string_len_null(Course::Description, 1500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_author_id")
                            .from(Course::Table, Course::AuthorId)
                            .to(Author::Table, Author::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_author_id")
                    .table(Course::Table)
                    .col(Course::AuthorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    AuthorId,
    Title,
    Description,
}
