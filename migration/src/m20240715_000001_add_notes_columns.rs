use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One column per statement: SQLite rejects multi-option ALTER TABLE
        manager
            .alter_table(
                Table::alter()
                    .table(Volunteers::Table)
                    .add_column(text_null(Volunteers::Notes))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(EmployedDrivers::Table)
                    .add_column(text_null(EmployedDrivers::Notes))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(EmployedDrivers::Table)
                    .drop_column(EmployedDrivers::Notes)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Volunteers::Table)
                    .drop_column(Volunteers::Notes)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Volunteers {
    Table,
    Notes,
}

#[derive(DeriveIden)]
enum EmployedDrivers {
    Table,
    Notes,
}
