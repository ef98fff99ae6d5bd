use crate::handlers;
use app::error::{Result, RoutingError};
use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, put},
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Allow one browser origin, with credentials, mirroring whatever method
/// and headers it asks for.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| RoutingError::Config(format!("Invalid CORS origin: {origin}")))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Build the application router with all routes.
///
/// Collection routes answer both with and without the trailing slash.
pub fn build_router(state: AppState, cors_origin: &str) -> Result<Router> {
    let volunteers = get(handlers::list_volunteers).post(handlers::create_volunteer);
    let drivers = get(handlers::list_drivers).post(handlers::create_driver);
    let routes = get(handlers::list_routes).post(handlers::create_route);

    Ok(Router::new()
        .route("/health", get(handlers::health))
        .route("/volunteers/", volunteers.clone())
        .route("/volunteers", volunteers)
        .route("/volunteers/{id}", delete(handlers::delete_volunteer))
        .route("/drivers/", drivers.clone())
        .route("/drivers", drivers)
        .route("/drivers/{id}", delete(handlers::delete_driver))
        .route("/routes/", routes.clone())
        .route("/routes", routes)
        .route(
            "/routes/{route_number}",
            put(handlers::update_route).delete(handlers::delete_route),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin)?)
        .with_state(state))
}
