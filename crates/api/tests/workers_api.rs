//! Integration tests for `GET /resource/workers` against an unconfigured
//! store.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use taskflow_api::config::Environment;

fn app() -> axum::Router {
    common::build_mock_app(Environment::Development)
}

#[tokio::test]
async fn unfiltered_list_returns_the_full_mock_fleet() {
    let response = get(app(), "/resource/workers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["usingMockData"], true);
    assert_eq!(json["workers"].as_array().unwrap().len(), 3);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn summary_aggregates_the_filtered_fleet() {
    let json = body_json(get(app(), "/resource/workers").await).await;
    let summary = &json["summary"];
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["healthy"], 2);
    assert_eq!(summary["warning"], 1);
    assert_eq!(summary["critical"], 0);
    assert_eq!(summary["totalActiveTasks"], 6);

    let avg_cpu = summary["avgCpuUsage"].as_f64().unwrap();
    assert!((avg_cpu - (68.0 + 42.0 + 85.0) / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn status_filter_narrows_fleet_and_summary_together() {
    let json = body_json(get(app(), "/resource/workers?status=warning").await).await;
    assert_eq!(json["workers"].as_array().unwrap().len(), 1);
    assert_eq!(json["workers"][0]["id"], "worker-node-03");
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["summary"]["warning"], 1);
    assert_eq!(json["summary"]["healthy"], 0);
}

#[tokio::test]
async fn unknown_status_yields_an_empty_fleet() {
    let json = body_json(get(app(), "/resource/workers?status=offline").await).await;
    assert!(json["workers"].as_array().unwrap().is_empty());
    assert_eq!(json["summary"]["total"], 0);
    // Averages over an empty fleet are zero, not null.
    assert_eq!(json["summary"]["avgCpuUsage"], 0.0);
}

#[tokio::test]
async fn record_shape_matches_the_contract() {
    let json = body_json(get(app(), "/resource/workers?status=healthy").await).await;
    let worker = &json["workers"][0];
    assert_eq!(worker["id"], "worker-node-01");
    assert_eq!(worker["instance_type"], "c5.2xlarge");
    assert_eq!(worker["cpuUsage"], 68);
    assert_eq!(worker["memoryUsage"], 45);
    assert_eq!(worker["networkIO"], 1.2);
    assert_eq!(worker["active_tasks"], 3);
    assert_eq!(worker["max_concurrent_tasks"], 5);
    assert_eq!(worker["completedTasks"], 1247);
    assert_eq!(worker["uptime"], "15d 4h 23m");
}
