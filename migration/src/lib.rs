pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_volunteers;
mod m20240601_000002_create_employed_drivers;
mod m20240601_000003_create_routes;
mod m20240715_000001_add_notes_columns;
mod m20240902_000001_create_route_number_sequence;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_volunteers::Migration),
            Box::new(m20240601_000002_create_employed_drivers::Migration),
            Box::new(m20240601_000003_create_routes::Migration),
            Box::new(m20240715_000001_add_notes_columns::Migration),
            Box::new(m20240902_000001_create_route_number_sequence::Migration),
        ]
    }
}
