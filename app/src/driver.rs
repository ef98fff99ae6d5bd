//! Discriminated reference from a route to the person driving it.
//!
//! A route stores `driver_type` and `driver_id` as two plain columns. The
//! pair only means something when read together: the type picks the table,
//! the id picks the row. [`DriverRef`] makes that explicit so exactly one
//! table is ever consulted.

pub const VOLUNTEER: &str = "volunteer";
pub const EMPLOYED_DRIVER: &str = "employed_driver";

pub const UNKNOWN_VOLUNTEER: &str = "Unknown Volunteer";
pub const UNKNOWN_DRIVER: &str = "Unknown Driver";
pub const UNKNOWN: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverRef {
    Volunteer(i32),
    EmployedDriver(i32),
    /// A `driver_type` outside the known set. Kept so the row round-trips.
    Unrecognized { driver_type: String, driver_id: i32 },
}

impl DriverRef {
    pub fn from_parts(driver_type: &str, driver_id: i32) -> Self {
        match driver_type {
            VOLUNTEER => Self::Volunteer(driver_id),
            EMPLOYED_DRIVER => Self::EmployedDriver(driver_id),
            other => Self::Unrecognized {
                driver_type: other.to_string(),
                driver_id,
            },
        }
    }

    pub fn driver_type(&self) -> &str {
        match self {
            Self::Volunteer(_) => VOLUNTEER,
            Self::EmployedDriver(_) => EMPLOYED_DRIVER,
            Self::Unrecognized { driver_type, .. } => driver_type,
        }
    }

    pub const fn driver_id(&self) -> i32 {
        match self {
            Self::Volunteer(id) | Self::EmployedDriver(id) => *id,
            Self::Unrecognized { driver_id, .. } => *driver_id,
        }
    }

    /// Name shown when the referenced person does not exist.
    pub const fn fallback_name(&self) -> &'static str {
        match self {
            Self::Volunteer(_) => UNKNOWN_VOLUNTEER,
            Self::EmployedDriver(_) => UNKNOWN_DRIVER,
            Self::Unrecognized { .. } => UNKNOWN,
        }
    }
}

pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}
