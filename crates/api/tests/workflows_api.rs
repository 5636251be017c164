//! Integration tests for the `/resource/workflows` endpoints against an
//! unconfigured store.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use taskflow_api::config::Environment;

fn app() -> axum::Router {
    common::build_mock_app(Environment::Development)
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unfiltered_list_returns_the_full_mock_set() {
    let response = get(app(), "/resource/workflows").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["usingMockData"], true);
    assert_eq!(json["total"], 3);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn status_filter_selects_matching_workflows() {
    let json = body_json(get(app(), "/resource/workflows?status=active").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["workflows"][0]["id"], "wf-001");

    let json = body_json(get(app(), "/resource/workflows?status=paused").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["workflows"][0]["id"], "wf-003");
}

#[tokio::test]
async fn search_matches_name_or_description() {
    // "etl" hits wf-001 by name.
    let json = body_json(get(app(), "/resource/workflows?search=etl").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["workflows"][0]["id"], "wf-001");

    // "reports" hits wf-003 by description only.
    let json = body_json(get(app(), "/resource/workflows?search=reports").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["workflows"][0]["id"], "wf-003");
}

#[tokio::test]
async fn status_all_equals_omitted_status() {
    let with_all = body_json(get(app(), "/resource/workflows?status=all").await).await;
    let without = body_json(get(app(), "/resource/workflows").await).await;
    assert_eq!(with_all["workflows"], without["workflows"]);
    assert_eq!(with_all["total"], without["total"]);
}

#[tokio::test]
async fn record_shape_matches_the_contract() {
    let json = body_json(get(app(), "/resource/workflows?status=active").await).await;
    let workflow = &json["workflows"][0];
    assert_eq!(workflow["name"], "ETL Data Pipeline");
    assert_eq!(workflow["schedule"], "Daily at 2:00 AM");
    assert_eq!(workflow["success_rate"], 98.5);
    assert_eq!(workflow["tasks"], 12);
    assert_eq!(workflow["owner"], "Sarah Kim");
    assert!(workflow["lastRun"].is_string());
    assert!(workflow["nextRun"].is_string());
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_with_missing_description_is_rejected() {
    let body = serde_json::json!({ "name": "Nightly ETL" });
    let response = post_json(app(), "/resource/workflows", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_empty_name_is_rejected() {
    let body = serde_json::json!({ "name": "", "description": "Loads the warehouse" });
    let response = post_json(app(), "/resource/workflows", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_without_a_store_is_service_unavailable() {
    let body = serde_json::json!({
        "name": "Nightly ETL",
        "description": "Loads the warehouse",
        "schedule": "0 2 * * *",
    });
    let response = post_json(app(), "/resource/workflows", body).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Database not initialized"));
}
