//! Request and response shapes shared by the record services and the HTTP layer.

use crate::driver::DriverRef;
use crate::error::{Result, RoutingError};
use serde::{Deserialize, Serialize};

const NAME_MAX_LEN: usize = 50;
const PHONE_MAX_LEN: usize = 15;
const DRIVER_TYPE_MAX_LEN: usize = 50;

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 10;

/// Offset/limit window for listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

const fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl ListParams {
    /// Reject windows the SQL drivers cannot bind as a signed 64-bit integer.
    pub fn validate(&self) -> Result<()> {
        let max = i64::MAX as u64;
        if self.skip > max {
            return Err(RoutingError::Validation(format!("skip must be at most {max}")));
        }
        if self.limit > max {
            return Err(RoutingError::Validation(format!("limit must be at most {max}")));
        }
        Ok(())
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Input for creating a volunteer or an employed driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFormDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PersonFormDto {
    pub fn validate(&self) -> Result<()> {
        require_text("first_name", &self.first_name, NAME_MAX_LEN)?;
        require_text("last_name", &self.last_name, NAME_MAX_LEN)?;
        if let Some(phone) = &self.phone_number {
            check_len("phone_number", phone, PHONE_MAX_LEN)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployedDriverDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
}

/// Input for creating or fully replacing a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFormDto {
    pub driver_type: String,
    pub driver_id: i32,
    pub pickup_locations: Vec<String>,
    pub dropoff_locations: Vec<String>,
}

impl RouteFormDto {
    pub fn validate(&self) -> Result<()> {
        require_text("driver_type", &self.driver_type, DRIVER_TYPE_MAX_LEN)
    }

    pub fn driver_ref(&self) -> DriverRef {
        DriverRef::from_parts(&self.driver_type, self.driver_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDto {
    pub route_number: i32,
    pub driver_type: String,
    pub driver_id: i32,
    pub pickup_locations: Vec<String>,
    pub dropoff_locations: Vec<String>,
}

/// A route as listed, with the assigned driver's display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteWithDriverDto {
    #[serde(flatten)]
    pub route: RouteDto,
    pub driver_name: String,
}

fn require_text(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RoutingError::Validation(format!("{field} is required")));
    }
    check_len(field, value, max_len)
}

fn check_len(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.chars().count() > max_len {
        return Err(RoutingError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}
