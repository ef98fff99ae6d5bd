use sea_orm::{DbErr, SqlErr};
use std::fmt;

#[derive(Debug)]
pub enum RoutingError {
    Config(String),
    Database(DbErr),
    NotFound(String),
    DuplicateKey(String),
    ConstraintViolation(String),
    Validation(String),
}

impl RoutingError {
    /// Reclassify a duplicate key as a constraint violation.
    ///
    /// Route writes report every integrity failure the same way, whether the
    /// cause was a reused route number or a rejected reference.
    #[must_use]
    pub fn into_constraint_violation(self) -> Self {
        match self {
            Self::DuplicateKey(msg) => Self::ConstraintViolation(msg),
            other => other,
        }
    }

    /// Whether the caller sent something the store refused.
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Database(_))
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Database(e) => write!(f, "Database error: {e}"),
            Self::NotFound(msg) => write!(f, "{msg}"),
            Self::DuplicateKey(msg) => write!(f, "Duplicate key: {msg}"),
            Self::ConstraintViolation(msg) => write!(f, "Constraint violation: {msg}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for RoutingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbErr> for RoutingError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::DuplicateKey(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => Self::Database(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoutingError>;
