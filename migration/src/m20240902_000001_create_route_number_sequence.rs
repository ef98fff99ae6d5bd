use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RouteNumberSequence::Table)
                    .if_not_exists()
                    .col(integer(RouteNumberSequence::Id).primary_key())
                    .col(integer(RouteNumberSequence::LastValue).default(0))
                    .to_owned(),
            )
            .await?;

        // Start from whatever routes already exist so no number is reissued
        manager
            .get_connection()
            .execute_unprepared(
                r"
                INSERT INTO route_number_sequence (id, last_value)
                SELECT 1, COALESCE(MAX(route_number), 0) FROM routes;
                ",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RouteNumberSequence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RouteNumberSequence {
    Table,
    Id,
    LastValue,
}
