//! Routes served from a snapshot file that changes between requests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use epochview_server::rpc::{create_router, DashboardState};
use epochview_server::FileSource;
use epochview_test_helpers::fixtures::sample_snapshot_json;
use epochview_test_helpers::{tokens, SnapshotBuilder};
use std::fs;
use std::sync::Arc;
use tower::ServiceExt;
use tracing_test::traced_test;

async fn get_json(state: &DashboardState, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = create_router(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[traced_test]
#[tokio::test]
async fn test_each_request_rereads_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("epoch_info.json");
    fs::write(&path, sample_snapshot_json()).unwrap();
    let state = DashboardState::new(Arc::new(FileSource::new(&path)));

    let (status, table) = get_json(&state, "/api/v1/epoch-validators").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["rows"].as_array().unwrap().len(), 8);
    assert_eq!(table["num_epochs"], 5);

    let smaller = SnapshotBuilder::new(2)
        .current_validator("solo.unc", tokens(7), &[0], (3, 3), (9, 9))
        .block_producer(1, "solo.unc")
        .build_json();
    fs::write(&path, smaller).unwrap();

    let (status, table) = get_json(&state, "/api/v1/epoch-validators").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["rows"][0]["account_id"], "solo.unc");
    assert_eq!(table["rows"][0]["current_role"], "BP");

    let (_, status_body) = get_json(&state, "/api/v1/status").await;
    assert_eq!(status_body["last_pass"]["epochs"], 2);
    assert_eq!(status_body["last_pass"]["validators"], 1);
}

#[traced_test]
#[tokio::test]
async fn test_failed_pass_keeps_last_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("epoch_info.json");
    fs::write(&path, sample_snapshot_json()).unwrap();
    let state = DashboardState::new(Arc::new(FileSource::new(&path)));

    let (status, _) = get_json(&state, "/api/v1/epoch-validators").await;
    assert_eq!(status, StatusCode::OK);

    fs::write(&path, "{ not json").unwrap();
    let (status, body) = get_json(&state, "/api/v1/epoch-validators").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("failed to parse snapshot from file:"));

    let (_, status_body) = get_json(&state, "/api/v1/status").await;
    assert_eq!(status_body["last_pass"]["validators"], 8);
    assert!(status_body["source"].as_str().unwrap().ends_with("epoch_info.json"));
}
