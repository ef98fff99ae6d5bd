use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployedDrivers::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployedDrivers::Id))
                    .col(string_len(EmployedDrivers::FirstName, 50))
                    .col(string_len(EmployedDrivers::LastName, 50))
                    .col(text_null(EmployedDrivers::Address))
                    .col(string_len_null(EmployedDrivers::PhoneNumber, 15))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployedDrivers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmployedDrivers {
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    PhoneNumber,
}
