//! Pod API endpoints
//!
//! Create, list, and delete pods in a namespace. Requests are translated
//! into manifests before any cluster call, so a malformed request fails
//! without touching the cluster.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::api::AppState;
use crate::error::AppResult;
use crate::k8s::{build_pod_manifest, normalize_pod_list};
use crate::models::{CreateWorkloadRequest, PodStatusResponse};

/// Create a pod from a workload request
#[utoipa::path(
    post,
    path = "/api/namespaces/{namespace}/pods",
    tag = "pods",
    params(("namespace" = String, Path, description = "Target namespace")),
    request_body = CreateWorkloadRequest,
    responses(
        (status = 200, description = "Pod created", body = PodStatusResponse),
        (status = 400, description = "Malformed request"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Json(req): Json<CreateWorkloadRequest>,
) -> AppResult<Json<PodStatusResponse>> {
    info!(
        "Creating pod {} in namespace {} (image={})",
        req.name, namespace, req.image
    );

    // Build first: validation failures must never reach the cluster
    let manifest = build_pod_manifest(&namespace, &req)?;

    let k8s = state.k8s().await?;
    let created = k8s.create_pod(&namespace, &manifest).await?;

    Ok(Json(crate::k8s::normalize_pod(&created)))
}

/// List pods in a namespace
#[utoipa::path(
    get,
    path = "/api/namespaces/{namespace}/pods",
    tag = "pods",
    params(("namespace" = String, Path, description = "Namespace to list")),
    responses(
        (status = 200, description = "Pods in the namespace", body = [PodStatusResponse]),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
) -> AppResult<Json<Vec<PodStatusResponse>>> {
    let k8s = state.k8s().await?;
    let pods = k8s.list_pods(&namespace).await?;

    Ok(Json(normalize_pod_list(&pods)))
}

/// Delete a pod
#[utoipa::path(
    delete,
    path = "/api/namespaces/{namespace}/pods/{name}",
    tag = "pods",
    params(
        ("namespace" = String, Path, description = "Namespace"),
        ("name" = String, Path, description = "Pod name"),
    ),
    responses(
        (status = 200, description = "Pod deleted"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> AppResult<Json<serde_json::Value>> {
    info!("Deleting pod {} in namespace {}", name, namespace);

    let k8s = state.k8s().await?;
    k8s.delete_pod(&namespace, &name).await?;

    Ok(Json(serde_json::json!({
        "deleted": name,
        "namespace": namespace
    })))
}
