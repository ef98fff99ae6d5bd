//! Thin axum handlers over `app::api_impl`.

use crate::error::ApiResult;
use crate::router::AppState;
use app::api::{
    EmployedDriverDto, ListParams, PersonFormDto, RouteDto, RouteFormDto, RouteWithDriverDto,
    VolunteerDto,
};
use app::api_impl;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};

/// GET /health - database round-trip
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}

// === Volunteers ===

/// GET /volunteers/
pub async fn list_volunteers(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<VolunteerDto>>> {
    let Query(params) = params?;
    Ok(Json(api_impl::list_volunteers_impl(&state.db, params).await?))
}

/// POST /volunteers/
pub async fn create_volunteer(
    State(state): State<AppState>,
    form: Result<Json<PersonFormDto>, JsonRejection>,
) -> ApiResult<Json<VolunteerDto>> {
    let Json(form) = form?;
    Ok(Json(api_impl::create_volunteer_impl(&state.db, form).await?))
}

/// DELETE /volunteers/{id}
pub async fn delete_volunteer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<VolunteerDto>> {
    let Path(id) = id?;
    Ok(Json(api_impl::delete_volunteer_impl(&state.db, id).await?))
}

// === Employed drivers ===

/// GET /drivers/
pub async fn list_drivers(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<EmployedDriverDto>>> {
    let Query(params) = params?;
    Ok(Json(
        api_impl::list_employed_drivers_impl(&state.db, params).await?,
    ))
}

/// POST /drivers/
pub async fn create_driver(
    State(state): State<AppState>,
    form: Result<Json<PersonFormDto>, JsonRejection>,
) -> ApiResult<Json<EmployedDriverDto>> {
    let Json(form) = form?;
    Ok(Json(
        api_impl::create_employed_driver_impl(&state.db, form).await?,
    ))
}

/// DELETE /drivers/{id}
pub async fn delete_driver(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<EmployedDriverDto>> {
    let Path(id) = id?;
    Ok(Json(
        api_impl::delete_employed_driver_impl(&state.db, id).await?,
    ))
}

// === Routes ===

/// GET /routes/ - routes with resolved driver names
pub async fn list_routes(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<RouteWithDriverDto>>> {
    let Query(params) = params?;
    Ok(Json(api_impl::list_routes_impl(&state.db, params).await?))
}

/// POST /routes/ - assigns the next route number
pub async fn create_route(
    State(state): State<AppState>,
    form: Result<Json<RouteFormDto>, JsonRejection>,
) -> ApiResult<Json<RouteDto>> {
    let Json(form) = form?;
    Ok(Json(api_impl::create_route_impl(&state.db, form).await?))
}

/// PUT /routes/{route_number}
pub async fn update_route(
    State(state): State<AppState>,
    route_number: Result<Path<i32>, PathRejection>,
    form: Result<Json<RouteFormDto>, JsonRejection>,
) -> ApiResult<Json<RouteDto>> {
    let Path(route_number) = route_number?;
    let Json(form) = form?;
    Ok(Json(
        api_impl::update_route_impl(&state.db, route_number, form).await?,
    ))
}

/// DELETE /routes/{route_number}
pub async fn delete_route(
    State(state): State<AppState>,
    route_number: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<RouteDto>> {
    let Path(route_number) = route_number?;
    Ok(Json(
        api_impl::delete_route_impl(&state.db, route_number).await?,
    ))
}
