use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Volunteers::Table)
                    .if_not_exists()
                    .col(pk_auto(Volunteers::Id))
                    .col(string_len(Volunteers::FirstName, 50))
                    .col(string_len(Volunteers::LastName, 50))
                    .col(text_null(Volunteers::Address))
                    .col(string_len_null(Volunteers::PhoneNumber, 15))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Volunteers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Volunteers {
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    PhoneNumber,
}
