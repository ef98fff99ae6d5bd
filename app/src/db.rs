use crate::error::{Result, RoutingError};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub async fn init_database(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);

    // Every pooled connection to `sqlite::memory:` would open its own empty database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options)
        .await
        .map_err(|e| RoutingError::Config(format!("Failed to connect to database: {e}")))
}
