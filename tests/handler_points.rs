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

async fn submit(server: &TestServer, receipt: &serde_json::Value) -> String {
    let response = server.post("/receipts/process").json(receipt).await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_target_receipt_round_trip_scores_28() {
    let server = test_app();
    let id = submit(&server, &common::target_receipt_json()).await;

    let response = server.get(&format!("/receipts/{id}/points")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["points"], 28);
}

#[tokio::test]
async fn test_corner_market_receipt_round_trip_scores_109() {
    let server = test_app();
    let id = submit(&server, &common::corner_market_receipt_json()).await;

    let response = server.get(&format!("/receipts/{id}/points")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["points"], 109);
}

#[tokio::test]
async fn test_points_are_stable_across_queries() {
    let server = test_app();
    let id = submit(&server, &common::target_receipt_json()).await;

    let first = server.get(&format!("/receipts/{id}/points")).await;
    let second = server.get(&format!("/receipts/{id}/points")).await;

    assert_eq!(
        first.json::<serde_json::Value>(),
        second.json::<serde_json::Value>()
    );
}

#[tokio::test]
async fn test_unknown_identifier_is_not_found() {
    let server = test_app();

    let response = server
        .get("/receipts/4f1c9f72-0000-4000-8000-000000000000/points")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Receipt not found");
}

#[tokio::test]
async fn test_identifiers_are_not_shared_between_stores() {
    let server = test_app();
    let other_server = test_app();

    let id = submit(&server, &common::target_receipt_json()).await;

    let response = other_server.get(&format!("/receipts/{id}/points")).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_points_rejects_other_methods() {
    let server = test_app();
    let id = submit(&server, &common::target_receipt_json()).await;

    let response = server.post(&format!("/receipts/{id}/points")).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
