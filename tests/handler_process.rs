mod common;

use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use receipt_points::api::handlers::{points_handler, process_receipt_handler};

fn test_app() -> TestServer {
    let app = Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(points_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_process_receipt_returns_identifier() {
    let server = test_app();

    let response = server
        .post("/receipts/process")
        .json(&common::target_receipt_json())
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();

    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
}

#[tokio::test]
async fn test_process_generates_distinct_identifiers() {
    let server = test_app();

    let first = server
        .post("/receipts/process")
        .json(&common::target_receipt_json())
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/receipts/process")
        .json(&common::target_receipt_json())
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_process_malformed_body_is_bad_request() {
    let server = test_app();

    let response = server
        .post("/receipts/process")
        .content_type("application/json")
        .bytes("{not valid json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!response.text().is_empty());
}

#[tokio::test]
async fn test_process_empty_object_is_accepted() {
    let server = test_app();

    // Absent fields decode to zero values; the receipt is stored and
    // scorable (25 quarter bonus on the unparsable total + 6 odd epoch day).
    let response = server
        .post("/receipts/process")
        .json(&serde_json::json!({}))
        .await;

    response.assert_status_ok();

    let id = response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let points = server.get(&format!("/receipts/{id}/points")).await;
    points.assert_status_ok();
    assert_eq!(points.json::<serde_json::Value>()["points"], 31);
}

#[tokio::test]
async fn test_process_rejects_other_methods() {
    let server = test_app();

    let response = server.get("/receipts/process").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
