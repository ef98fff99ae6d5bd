//! Record services behind the HTTP handlers.
//!
//! Reads go straight to the pooled connection. Every write opens its own
//! transaction and commits only on success; an early return drops the
//! transaction, which rolls it back.

use crate::api::{
    EmployedDriverDto, ListParams, PersonFormDto, RouteDto, RouteFormDto, RouteWithDriverDto,
    VolunteerDto,
};
use crate::driver::{DriverRef, full_name};
use crate::entities::{employed_drivers, routes, volunteers};
use crate::error::{Result, RoutingError};
use crate::repositories;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

// === DTO Conversions ===

pub fn volunteer_to_dto(volunteer: volunteers::Model) -> VolunteerDto {
    VolunteerDto {
        id: volunteer.id,
        first_name: volunteer.first_name,
        last_name: volunteer.last_name,
        address: volunteer.address,
        phone_number: volunteer.phone_number,
        notes: volunteer.notes,
    }
}

pub fn employed_driver_to_dto(driver: employed_drivers::Model) -> EmployedDriverDto {
    EmployedDriverDto {
        id: driver.id,
        first_name: driver.first_name,
        last_name: driver.last_name,
        address: driver.address,
        phone_number: driver.phone_number,
        notes: driver.notes,
    }
}

pub fn route_to_dto(route: routes::Model) -> RouteDto {
    RouteDto {
        route_number: route.route_number,
        driver_type: route.driver_type,
        driver_id: route.driver_id,
        pickup_locations: route.pickup_locations.0,
        dropoff_locations: route.dropoff_locations.0,
    }
}

// === Volunteer Operations ===

pub async fn list_volunteers_impl(
    db: &DatabaseConnection,
    params: ListParams,
) -> Result<Vec<VolunteerDto>> {
    params.validate()?;

    let volunteers = repositories::list_volunteers(db, params).await?;
    Ok(volunteers.into_iter().map(volunteer_to_dto).collect())
}

pub async fn create_volunteer_impl(
    db: &DatabaseConnection,
    form: PersonFormDto,
) -> Result<VolunteerDto> {
    form.validate()?;

    let txn = db.begin().await?;
    let volunteer = repositories::insert_volunteer(&txn, form).await?;
    txn.commit().await?;

    info!(id = volunteer.id, "Created volunteer");
    Ok(volunteer_to_dto(volunteer))
}

/// Delete a volunteer and hand back the row as it was.
pub async fn delete_volunteer_impl(db: &DatabaseConnection, id: i32) -> Result<VolunteerDto> {
    let txn = db.begin().await?;
    let volunteer = repositories::find_volunteer(&txn, id)
        .await?
        .ok_or_else(|| RoutingError::NotFound("Volunteer not found".to_string()))?;

    repositories::delete_volunteer(&txn, volunteer.clone()).await?;
    txn.commit().await?;

    info!(id, "Deleted volunteer");
    Ok(volunteer_to_dto(volunteer))
}

// === Employed Driver Operations ===

pub async fn list_employed_drivers_impl(
    db: &DatabaseConnection,
    params: ListParams,
) -> Result<Vec<EmployedDriverDto>> {
    params.validate()?;

    let drivers = repositories::list_employed_drivers(db, params).await?;
    Ok(drivers.into_iter().map(employed_driver_to_dto).collect())
}

pub async fn create_employed_driver_impl(
    db: &DatabaseConnection,
    form: PersonFormDto,
) -> Result<EmployedDriverDto> {
    form.validate()?;

    let txn = db.begin().await?;
    let driver = repositories::insert_employed_driver(&txn, form).await?;
    txn.commit().await?;

    info!(id = driver.id, "Created employed driver");
    Ok(employed_driver_to_dto(driver))
}

pub async fn delete_employed_driver_impl(
    db: &DatabaseConnection,
    id: i32,
) -> Result<EmployedDriverDto> {
    let txn = db.begin().await?;
    let driver = repositories::find_employed_driver(&txn, id)
        .await?
        .ok_or_else(|| RoutingError::NotFound("Driver not found".to_string()))?;

    repositories::delete_employed_driver(&txn, driver.clone()).await?;
    txn.commit().await?;

    info!(id, "Deleted employed driver");
    Ok(employed_driver_to_dto(driver))
}

// === Route Operations ===

/// Resolve the display name of whoever drives a route.
///
/// A missing person is not an error: the route still lists, with a
/// placeholder naming the kind of driver that was expected.
pub async fn resolve_driver_name<C: ConnectionTrait>(
    conn: &C,
    driver: &DriverRef,
) -> Result<String> {
    let name = match driver {
        DriverRef::Volunteer(id) => repositories::find_volunteer(conn, *id)
            .await?
            .map(|v| full_name(&v.first_name, &v.last_name)),
        DriverRef::EmployedDriver(id) => repositories::find_employed_driver(conn, *id)
            .await?
            .map(|d| full_name(&d.first_name, &d.last_name)),
        DriverRef::Unrecognized { .. } => None,
    };

    Ok(name.unwrap_or_else(|| driver.fallback_name().to_string()))
}

/// List routes with their driver names.
///
/// Names are looked up one row at a time.
pub async fn list_routes_impl(
    db: &DatabaseConnection,
    params: ListParams,
) -> Result<Vec<RouteWithDriverDto>> {
    params.validate()?;

    let routes = repositories::list_routes(db, params).await?;

    let mut result = Vec::with_capacity(routes.len());
    for route in routes {
        let driver = DriverRef::from_parts(&route.driver_type, route.driver_id);
        let driver_name = resolve_driver_name(db, &driver).await?;
        debug!(
            route_number = route.route_number,
            driver_type = driver.driver_type(),
            driver_id = driver.driver_id(),
            %driver_name,
            "Resolved route driver"
        );

        result.push(RouteWithDriverDto {
            route: route_to_dto(route),
            driver_name,
        });
    }

    Ok(result)
}

pub async fn create_route_impl(db: &DatabaseConnection, form: RouteFormDto) -> Result<RouteDto> {
    form.validate()?;
    let driver = form.driver_ref();

    let txn = db.begin().await?;
    let route_number = repositories::next_route_number(&txn).await?;
    let route = repositories::insert_route(&txn, route_number, form)
        .await
        .map_err(RoutingError::into_constraint_violation)?;
    txn.commit()
        .await
        .map_err(|e| RoutingError::from(e).into_constraint_violation())?;

    info!(
        route_number,
        driver_type = driver.driver_type(),
        driver_id = driver.driver_id(),
        "Created route"
    );
    Ok(route_to_dto(route))
}

pub async fn update_route_impl(
    db: &DatabaseConnection,
    route_number: i32,
    form: RouteFormDto,
) -> Result<RouteDto> {
    form.validate()?;

    let txn = db.begin().await?;
    let route = repositories::find_route(&txn, route_number)
        .await?
        .ok_or_else(|| RoutingError::NotFound("Route not found".to_string()))?;

    let updated = repositories::replace_route(&txn, route, form)
        .await
        .map_err(RoutingError::into_constraint_violation)?;
    txn.commit().await?;

    info!(route_number, "Updated route");
    Ok(route_to_dto(updated))
}

pub async fn delete_route_impl(db: &DatabaseConnection, route_number: i32) -> Result<RouteDto> {
    let txn = db.begin().await?;
    let route = repositories::find_route(&txn, route_number)
        .await?
        .ok_or_else(|| RoutingError::NotFound("Route not found".to_string()))?;

    repositories::delete_route(&txn, route.clone()).await?;
    txn.commit().await?;

    info!(route_number, "Deleted route");
    Ok(route_to_dto(route))
}
