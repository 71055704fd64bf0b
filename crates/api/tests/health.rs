mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get_anonymous};

#[tokio::test]
async fn health_check_reports_ok_with_memory_store() {
    let app = common::build_test_app(common::memory_store());
    let response = get_anonymous(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn health_check_reports_degraded_when_store_fails() {
    let app = common::build_test_app(Arc::new(common::FailingStore));
    let response = get_anonymous(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = common::build_test_app(common::memory_store());
    let response = get_anonymous(app, "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
