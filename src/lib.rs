//! KubeDash Backend Library
//!
//! This library contains all the core components of the KubeDash backend.

pub mod api;
pub mod chaos;
pub mod config;
pub mod error;
pub mod k8s;
pub mod models;

use axum::{
    routing::{delete, get, post},
    Router,
};
use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::api::AppState;

/// Create the application router with the given state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/api/cluster/status", get(api::health::cluster_status))
        // Pods
        .route("/api/namespaces/:namespace/pods", post(api::pods::create))
        .route("/api/namespaces/:namespace/pods", get(api::pods::list))
        .route(
            "/api/namespaces/:namespace/pods/:name",
            delete(api::pods::delete),
        )
        // Deployments
        .route(
            "/api/namespaces/:namespace/deployments",
            post(api::deployments::create),
        )
        .route(
            "/api/namespaces/:namespace/deployments/:name",
            delete(api::deployments::delete),
        )
        // Nodes
        .route("/api/nodes", get(api::nodes::list))
        // Chaos
        .route("/api/namespaces/:namespace/chaos", post(api::chaos::create))
        .route(
            "/api/namespaces/:namespace/chaos/:kind/:name",
            delete(api::chaos::delete),
        )
        // OpenAPI / Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Create CORS layer with secure configuration
fn cors_layer() -> CorsLayer {
    // Allow origins from environment or default to localhost for development
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let origins: Vec<_> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}
