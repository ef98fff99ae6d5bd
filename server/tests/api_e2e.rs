//! E2E tests for the JSON API via HTTP
//!
//! These tests build the full Axum router over a migrated in-memory
//! database and drive it with `oneshot` requests.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use app::db;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use serde_json::{Value, json};
use server_lib::{AppState, build_router};
use tower::ServiceExt;

const ORIGIN: &str = "http://localhost:5173";

async fn setup_test_app() -> Router {
    let db = db::init_database("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    build_router(AppState { db }, ORIGIN).unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn volunteer_body(first: &str, last: &str) -> Value {
    json!({ "first_name": first, "last_name": last, "phone_number": "555-0199" })
}

fn route_body(driver_type: &str, driver_id: i64) -> Value {
    json!({
        "driver_type": driver_type,
        "driver_id": driver_id,
        "pickup_locations": ["Central Pantry"],
        "dropoff_locations": ["4 Elm St", "9 Oak Ave"],
    })
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_volunteer_create_list_delete() {
    let app = setup_test_app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/volunteers/",
        Some(volunteer_body("Ada", "Lovelace")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["first_name"], "Ada");
    assert_eq!(created["address"], Value::Null);
    let id = created["id"].as_i64().unwrap();

    let (status, listed) = send(&app, Method::GET, "/volunteers/?skip=0&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    let (status, deleted) = send(&app, Method::DELETE, &format!("/volunteers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (_, listed) = send(&app, Method::GET, "/volunteers/", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_collection_path_without_trailing_slash() {
    let app = setup_test_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/drivers",
        Some(volunteer_body("Grace", "Hopper")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = send(&app, Method::GET, "/drivers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_volunteer_returns_404() {
    let app = setup_test_app().await;
    let (status, body) = send(&app, Method::DELETE, "/volunteers/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Volunteer not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_delete_missing_driver_returns_404() {
    let app = setup_test_app().await;
    let (status, body) = send(&app, Method::DELETE, "/drivers/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Driver not found");
}

#[tokio::test]
async fn test_missing_required_field_returns_422() {
    let app = setup_test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/volunteers/",
        Some(json!({ "first_name": "Ada" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
}

#[tokio::test]
async fn test_blank_name_returns_422() {
    let app = setup_test_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/drivers/",
        Some(volunteer_body("", "Hopper")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_negative_skip_returns_422() {
    let app = setup_test_app().await;
    let (status, _) = send(&app, Method::GET, "/routes/?skip=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_oversized_limit_returns_422() {
    let app = setup_test_app().await;
    let (status, body) = send(
        &app,
        Method::GET,
        "/volunteers/?limit=18446744073709551615",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);

    let (status, _) = send(&app, Method::GET, "/routes/?skip=9223372036854775808", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_numeric_id_returns_422_json() {
    let app = setup_test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/volunteers/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));

    let (status, body) = send(&app, Method::PUT, "/routes/xyz", Some(route_body("volunteer", 1))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
}

#[tokio::test]
async fn test_route_numbers_increase_and_skip_deleted() {
    let app = setup_test_app().await;

    let (status, first) = send(&app, Method::POST, "/routes/", Some(route_body("volunteer", 1))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["route_number"], 1);

    let (_, second) = send(&app, Method::POST, "/routes/", Some(route_body("volunteer", 1))).await;
    assert_eq!(second["route_number"], 2);

    let (status, _) = send(&app, Method::DELETE, "/routes/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, third) = send(&app, Method::POST, "/routes/", Some(route_body("volunteer", 1))).await;
    assert_eq!(third["route_number"], 3);
}

#[tokio::test]
async fn test_route_listing_includes_driver_name() {
    let app = setup_test_app().await;

    let (_, volunteer) = send(
        &app,
        Method::POST,
        "/volunteers/",
        Some(volunteer_body("Ada", "Lovelace")),
    )
    .await;
    let volunteer_id = volunteer["id"].as_i64().unwrap();

    send(&app, Method::POST, "/routes/", Some(route_body("volunteer", volunteer_id))).await;
    send(&app, Method::POST, "/routes/", Some(route_body("volunteer", 500))).await;
    send(&app, Method::POST, "/routes/", Some(route_body("employed_driver", 500))).await;
    send(&app, Method::POST, "/routes/", Some(route_body("bicycle", 1))).await;

    let (status, listed) = send(&app, Method::GET, "/routes/", None).await;
    assert_eq!(status, StatusCode::OK);

    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0]["driver_name"], "Ada Lovelace");
    assert_eq!(listed[0]["route_number"], 1);
    assert_eq!(listed[0]["pickup_locations"], json!(["Central Pantry"]));
    assert_eq!(listed[1]["driver_name"], "Unknown Volunteer");
    assert_eq!(listed[2]["driver_name"], "Unknown Driver");
    assert_eq!(listed[3]["driver_name"], "Unknown");
}

#[tokio::test]
async fn test_route_listing_honors_skip_and_limit() {
    let app = setup_test_app().await;
    for _ in 0..3 {
        send(&app, Method::POST, "/routes/", Some(route_body("volunteer", 1))).await;
    }

    let (_, listed) = send(&app, Method::GET, "/routes/?skip=1&limit=1", None).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["route_number"], 2);
}

#[tokio::test]
async fn test_update_route_is_reflected_in_listing() {
    let app = setup_test_app().await;
    send(&app, Method::POST, "/routes/", Some(route_body("volunteer", 1))).await;

    let mut replacement = route_body("volunteer", 1);
    replacement["pickup_locations"] = json!(["North Depot", "South Depot"]);
    let (status, updated) = send(&app, Method::PUT, "/routes/1", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["route_number"], 1);
    assert!(updated.get("driver_name").is_none());

    let (_, listed) = send(&app, Method::GET, "/routes/", None).await;
    assert_eq!(
        listed[0]["pickup_locations"],
        json!(["North Depot", "South Depot"])
    );
}

#[tokio::test]
async fn test_update_missing_route_returns_404() {
    let app = setup_test_app().await;
    let (status, body) = send(&app, Method::PUT, "/routes/9", Some(route_body("volunteer", 1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn test_delete_missing_route_returns_404() {
    let app = setup_test_app().await;
    let (status, _) = send(&app, Method::DELETE, "/routes/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_allows_dev_origin() {
    let app = setup_test_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/routes/")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ORIGIN
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "PUT"
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_other_origins() {
    let app = setup_test_app().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/volunteers/")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
