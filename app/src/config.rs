use crate::error::{Result, RoutingError};
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/food_routing.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// The single browser origin allowed to call the API.
    pub cors_origin: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = non_empty_var("DATABASE_URL", DEFAULT_DATABASE_URL)?;

        let bind_addr = dotenvy::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|_| RoutingError::Config("Invalid BIND_ADDR".to_string()))?;

        let cors_origin = non_empty_var("CORS_ORIGIN", DEFAULT_CORS_ORIGIN)?;

        let run_migrations = dotenvy::var("RUN_MIGRATIONS")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| RoutingError::Config("Invalid RUN_MIGRATIONS".to_string()))?;

        Ok(Config {
            database_url,
            bind_addr,
            cors_origin,
            run_migrations,
        })
    }
}

fn non_empty_var(key: &str, default: &str) -> Result<String> {
    let value = dotenvy::var(key).unwrap_or_else(|_| default.to_string());
    if value.trim().is_empty() {
        return Err(RoutingError::Config(format!("{key} must not be empty")));
    }
    Ok(value)
}
