//! Record management for the food routing admin tool.
//!
//! Volunteers, employed drivers and delivery routes live in a relational
//! store accessed through `SeaORM`. The HTTP surface lives in the `server`
//! crate; everything here is transport-agnostic.

pub mod api;
pub mod api_impl;
pub mod config;
pub mod db;
pub mod driver;
pub mod entities;
pub mod error;
pub mod repositories;
