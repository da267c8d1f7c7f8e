//! Deployment API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::api::AppState;
use crate::error::AppResult;
use crate::k8s::build_deployment_manifest;
use crate::models::CreateWorkloadRequest;

/// Create a deployment from a workload request
#[utoipa::path(
    post,
    path = "/api/namespaces/{namespace}/deployments",
    tag = "deployments",
    params(("namespace" = String, Path, description = "Target namespace")),
    request_body = CreateWorkloadRequest,
    responses(
        (status = 200, description = "Deployment created"),
        (status = 400, description = "Malformed request"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Json(req): Json<CreateWorkloadRequest>,
) -> AppResult<Json<serde_json::Value>> {
    info!(
        "Creating deployment {} in namespace {} (image={}, replicas={:?})",
        req.name, namespace, req.image, req.replicas
    );

    // Build first: validation failures must never reach the cluster
    let manifest = build_deployment_manifest(&namespace, &req)?;

    let k8s = state.k8s().await?;
    let created = k8s.create_deployment(&namespace, &manifest).await?;

    Ok(Json(serde_json::json!({
        "created": created.metadata.name,
        "namespace": namespace
    })))
}

/// Delete a deployment
#[utoipa::path(
    delete,
    path = "/api/namespaces/{namespace}/deployments/{name}",
    tag = "deployments",
    params(
        ("namespace" = String, Path, description = "Namespace"),
        ("name" = String, Path, description = "Deployment name"),
    ),
    responses(
        (status = 200, description = "Deployment deleted"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> AppResult<Json<serde_json::Value>> {
    info!("Deleting deployment {} in namespace {}", name, namespace);

    let k8s = state.k8s().await?;
    k8s.delete_deployment(&namespace, &name).await?;

    Ok(Json(serde_json::json!({
        "deleted": name,
        "namespace": namespace
    })))
}
