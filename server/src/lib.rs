//! HTTP surface of the food routing admin backend.
//!
//! The binary and the integration tests both build the router from here.

pub mod error;
pub mod handlers;
pub mod router;

pub use router::{AppState, build_router};
