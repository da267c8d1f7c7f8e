//! Integration tests for the API
//!
//! The router runs without a cluster connection; anything that would touch
//! the cluster answers with an error, while validation failures come back as
//! 400 before a connection is ever needed.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use kubedash_backend::{api::AppState, config::Config};

fn setup_app() -> axum::Router {
    let config = Config::default();
    let state = AppState::new(config);

    kubedash_backend::create_router(state)
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_cluster_status_disconnected() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cluster/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["connected"], false);
}

#[tokio::test]
async fn test_create_pod_invalid_name_fails_fast() {
    let app = setup_app();

    // no cluster is connected, so a 400 here proves validation ran first
    let payload = json!({
        "name": "Not A Label",
        "image": "busybox"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/namespaces/default/pods")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_deployment_invalid_replicas_fails_fast() {
    let app = setup_app();

    let payload = json!({
        "name": "web",
        "image": "nginx:1.25",
        "replicas": 0
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/namespaces/default/deployments")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_chaos_unknown_kind_rejected() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/namespaces/default/chaos/FlakyChaos/exp-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
