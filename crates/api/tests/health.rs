//! Integration tests for the health and schema-status endpoints against an
//! unconfigured store, plus general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use taskflow_api::config::Environment;

// ---------------------------------------------------------------------------
// Test: GET /health degrades gracefully without a store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_without_store_reports_degraded() {
    let app = common::build_mock_app(Environment::Development);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert!(json["version"].is_string());
    assert_eq!(json["database"]["status"], "unavailable");
    assert_eq!(json["database"]["schema"]["allTablesExist"], false);
    assert_eq!(json["features"]["mockDataFallback"], true);
    assert_eq!(json["features"]["realTimeUpdates"], false);
    assert_eq!(json["features"]["authentication"], false);
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: GET /schema-status lists every required table as missing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn schema_status_without_store_is_unavailable() {
    let app = common::build_mock_app(Environment::Development);
    let response = get(app, "/schema-status").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["allTablesExist"], false);
    assert_eq!(json["missingTables"].as_array().unwrap().len(), 10);
    assert!(json["missingTables"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("audit_logs")));
    assert!(json["existingTables"].as_array().unwrap().is_empty());
    assert_eq!(json["tableStatus"].as_array().unwrap().len(), 10);
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_mock_app(Environment::Development);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_mock_app(Environment::Development);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
