//! Router tests that need no database. The store is unreachable, so every
//! report route exercises the failure path.

mod common;

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use store_compliance_api::{AppState, Config, database::create_pool, routes};
use tower::ServiceExt;

use common::*;

const REPORT_ROUTES: &[&str] = &[
    "/api/areas",
    "/api/brands",
    "/api/compliance-report",
    "/api/brand-compliance",
];

#[tokio::test]
async fn test_store_failure_returns_500_with_error() {
    let app = routes::create_router(AppState::new(unreachable_pool()));

    for route in REPORT_ROUTES {
        let (status, body) = get(&app, route).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{route}");
        assert!(!body.is_array(), "{route} returned a partial array");

        let object = body.as_object().expect("error body is an object");
        assert_eq!(object.len(), 1, "{route}: {body}");
        let message = object["error"].as_str().expect("error is a string");
        assert!(!message.is_empty(), "{route}");
    }
}

#[tokio::test]
async fn test_brand_compliance_failure_with_filters() {
    let app = routes::create_router(AppState::new(unreachable_pool()));

    let (status, body) = get(
        &app,
        "/api/brand-compliance?area_id=1&date_from=2024-01-01&date_to=2024-12-31",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_filters_are_not_rejected() {
    let app = routes::create_router(AppState::new(unreachable_pool()));

    // Values pass straight through to the store, so only the store failure
    // shows up here, never a client error.
    let (status, body) = get(
        &app,
        "/api/compliance-report?area_id=&brand_id=abc&date_from=yesterday&date_to=",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_repeated_filter_keys_use_error_body() {
    let app = routes::create_router(AppState::new(unreachable_pool()));

    for uri in [
        "/api/compliance-report?area_id=1&area_id=2",
        "/api/brand-compliance?area_id=1&area_id=2",
        "/api/brand-compliance?date_from=a&date_from=b",
    ] {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(response.headers()["content-type"], "application/json", "{uri}");

        let (_, body) = get(&app, uri).await;
        let message = body["error"].as_str().expect("error is a string");
        assert!(message.contains("duplicate field"), "{uri}: {message}");
    }
}

#[tokio::test]
async fn test_unreachable_store_at_startup_still_serves() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("DB_HOST", "127.0.0.1"),
        ("DB_PORT", "1"),
        ("DB_CONNECT_RETRIES", "2"),
        ("DB_ACQUIRE_TIMEOUT_SECS", "1"),
    ]);
    let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

    let pool = create_pool(&config)
        .await
        .expect("an unreachable store degrades instead of failing startup");
    let app = routes::create_router(AppState::new(pool));

    let (status, body) = get(&app, "/api/compliance-report").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_reports_unreachable_store() {
    let app = routes::create_router(AppState::new(unreachable_pool()));

    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "error");
    assert_eq!(body["database"], "unhealthy");
    assert_eq!(body["service"], "store-compliance-api");
}

#[tokio::test]
async fn test_app_sets_request_id() {
    let app = routes::create_app(AppState::new(unreachable_pool()));

    let response = app
        .oneshot(Request::get("/api/areas").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_app_keeps_caller_request_id() {
    let app = routes::create_app(AppState::new(unreachable_pool()));

    let response = app
        .oneshot(
            Request::get("/api/brands")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_app_allows_any_origin() {
    let app = routes::create_app(AppState::new(unreachable_pool()));

    let response = app
        .oneshot(
            Request::get("/api/areas")
                .header("origin", "http://dashboard.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
