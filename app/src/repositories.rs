//! Row-level data access.
//!
//! Every function takes any `ConnectionTrait`, so the record services can run
//! them against a pooled connection for reads and inside a transaction for
//! writes.

use crate::api::{ListParams, PersonFormDto, RouteFormDto};
use crate::entities::route_number_sequence::SEQUENCE_ROW_ID;
use crate::entities::routes::Locations;
use crate::entities::{employed_drivers, prelude::*, route_number_sequence, routes, volunteers};
use crate::error::{Result, RoutingError};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, Unchanged,
};

// === Volunteers ===

pub async fn list_volunteers<C: ConnectionTrait>(
    conn: &C,
    params: ListParams,
) -> Result<Vec<volunteers::Model>> {
    Ok(Volunteers::find()
        .order_by_asc(volunteers::Column::Id)
        .offset(params.skip)
        .limit(params.limit)
        .all(conn)
        .await?)
}

pub async fn find_volunteer<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<volunteers::Model>> {
    Ok(Volunteers::find_by_id(id).one(conn).await?)
}

pub async fn insert_volunteer<C: ConnectionTrait>(
    conn: &C,
    form: PersonFormDto,
) -> Result<volunteers::Model> {
    let new_volunteer = volunteers::ActiveModel {
        first_name: Set(form.first_name),
        last_name: Set(form.last_name),
        address: Set(form.address),
        phone_number: Set(form.phone_number),
        notes: Set(form.notes),
        ..Default::default()
    };

    Ok(new_volunteer.insert(conn).await?)
}

pub async fn delete_volunteer<C: ConnectionTrait>(
    conn: &C,
    volunteer: volunteers::Model,
) -> Result<()> {
    volunteer.delete(conn).await?;
    Ok(())
}

// === Employed drivers ===

pub async fn list_employed_drivers<C: ConnectionTrait>(
    conn: &C,
    params: ListParams,
) -> Result<Vec<employed_drivers::Model>> {
    Ok(EmployedDrivers::find()
        .order_by_asc(employed_drivers::Column::Id)
        .offset(params.skip)
        .limit(params.limit)
        .all(conn)
        .await?)
}

pub async fn find_employed_driver<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<employed_drivers::Model>> {
    Ok(EmployedDrivers::find_by_id(id).one(conn).await?)
}

pub async fn insert_employed_driver<C: ConnectionTrait>(
    conn: &C,
    form: PersonFormDto,
) -> Result<employed_drivers::Model> {
    let new_driver = employed_drivers::ActiveModel {
        first_name: Set(form.first_name),
        last_name: Set(form.last_name),
        address: Set(form.address),
        phone_number: Set(form.phone_number),
        notes: Set(form.notes),
        ..Default::default()
    };

    Ok(new_driver.insert(conn).await?)
}

pub async fn delete_employed_driver<C: ConnectionTrait>(
    conn: &C,
    driver: employed_drivers::Model,
) -> Result<()> {
    driver.delete(conn).await?;
    Ok(())
}

// === Routes ===

pub async fn list_routes<C: ConnectionTrait>(
    conn: &C,
    params: ListParams,
) -> Result<Vec<routes::Model>> {
    Ok(Routes::find()
        .order_by_asc(routes::Column::RouteNumber)
        .offset(params.skip)
        .limit(params.limit)
        .all(conn)
        .await?)
}

pub async fn find_route<C: ConnectionTrait>(
    conn: &C,
    route_number: i32,
) -> Result<Option<routes::Model>> {
    Ok(Routes::find_by_id(route_number).one(conn).await?)
}

/// Highest route number currently stored, if any.
pub async fn max_route_number<C: ConnectionTrait>(conn: &C) -> Result<Option<i32>> {
    let max = Routes::find()
        .select_only()
        .column_as(routes::Column::RouteNumber.max(), "max_route_number")
        .into_tuple::<Option<i32>>()
        .one(conn)
        .await?;

    Ok(max.flatten())
}

/// Issue the next route number.
///
/// The sequence row is bumped with a single `UPDATE ... SET last_value =
/// last_value + 1`, which holds its row lock until the surrounding
/// transaction ends. Call this inside the transaction that inserts the route.
/// The current maximum acts as a floor for rows written around the sequence.
pub async fn next_route_number<C: ConnectionTrait>(conn: &C) -> Result<i32> {
    let bumped = RouteNumberSequence::update_many()
        .col_expr(
            route_number_sequence::Column::LastValue,
            Expr::col(route_number_sequence::Column::LastValue).add(1),
        )
        .filter(route_number_sequence::Column::Id.eq(SEQUENCE_ROW_ID))
        .exec(conn)
        .await?;

    if bumped.rows_affected == 0 {
        return Err(RoutingError::Config(
            "route number sequence row is missing; run migrations".to_string(),
        ));
    }

    let issued = RouteNumberSequence::find_by_id(SEQUENCE_ROW_ID)
        .one(conn)
        .await?
        .map(|row| row.last_value)
        .ok_or_else(|| RoutingError::Config("route number sequence row vanished".to_string()))?;

    let floor = max_route_number(conn).await?.unwrap_or(0) + 1;
    if issued >= floor {
        return Ok(issued);
    }

    route_number_sequence::ActiveModel {
        id: Unchanged(SEQUENCE_ROW_ID),
        last_value: Set(floor),
    }
    .update(conn)
    .await?;

    Ok(floor)
}

pub async fn insert_route<C: ConnectionTrait>(
    conn: &C,
    route_number: i32,
    form: RouteFormDto,
) -> Result<routes::Model> {
    let new_route = routes::ActiveModel {
        route_number: Set(route_number),
        driver_type: Set(form.driver_type),
        driver_id: Set(form.driver_id),
        pickup_locations: Set(Locations(form.pickup_locations)),
        dropoff_locations: Set(Locations(form.dropoff_locations)),
    };

    Ok(new_route.insert(conn).await?)
}

/// Replace every mutable column of `route`. The route number stays put.
pub async fn replace_route<C: ConnectionTrait>(
    conn: &C,
    route: routes::Model,
    form: RouteFormDto,
) -> Result<routes::Model> {
    let mut active_route: routes::ActiveModel = route.into();
    active_route.driver_type = Set(form.driver_type);
    active_route.driver_id = Set(form.driver_id);
    active_route.pickup_locations = Set(Locations(form.pickup_locations));
    active_route.dropoff_locations = Set(Locations(form.dropoff_locations));

    Ok(active_route.update(conn).await?)
}

pub async fn delete_route<C: ConnectionTrait>(conn: &C, route: routes::Model) -> Result<()> {
    route.delete(conn).await?;
    Ok(())
}
