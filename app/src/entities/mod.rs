pub mod prelude;

pub mod employed_drivers;
pub mod route_number_sequence;
pub mod routes;
pub mod volunteers;
