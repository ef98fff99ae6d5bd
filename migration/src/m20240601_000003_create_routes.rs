use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // route_number is issued by the application, never by the database
        manager
            .create_table(
                Table::create()
                    .table(Routes::Table)
                    .if_not_exists()
                    .col(integer(Routes::RouteNumber).primary_key())
                    .col(string_len(Routes::DriverType, 50))
                    .col(integer(Routes::DriverId))
                    .col(json(Routes::PickupLocations))
                    .col(json(Routes::DropoffLocations))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_routes_driver")
                    .table(Routes::Table)
                    .col(Routes::DriverType)
                    .col(Routes::DriverId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Routes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Routes {
    Table,
    RouteNumber,
    DriverType,
    DriverId,
    PickupLocations,
    DropoffLocations,
}
