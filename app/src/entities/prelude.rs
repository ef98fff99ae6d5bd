pub use super::employed_drivers::Entity as EmployedDrivers;
pub use super::route_number_sequence::Entity as RouteNumberSequence;
pub use super::routes::Entity as Routes;
pub use super::volunteers::Entity as Volunteers;
