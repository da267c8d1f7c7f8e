//! Chaos experiment API endpoints
//!
//! Create and delete Chaos Mesh experiments against deployed workloads.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::api::AppState;
use crate::chaos::{ChaosClient, ChaosExperiment, CreateExperimentRequest, PodSelector};
use crate::error::{AppError, AppResult};
use crate::k8s::{canonical_labels, validate_name};

/// Create a chaos experiment
#[utoipa::path(
    post,
    path = "/api/namespaces/{namespace}/chaos",
    tag = "chaos",
    params(("namespace" = String, Path, description = "Target namespace")),
    request_body = CreateExperimentRequest,
    responses(
        (status = 200, description = "Experiment created"),
        (status = 400, description = "Malformed request"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Json(req): Json<CreateExperimentRequest>,
) -> AppResult<Json<serde_json::Value>> {
    info!(
        "Creating chaos experiment {} in namespace {} (kind={}, target={})",
        req.name, namespace, req.kind, req.target
    );

    // Build first: validation failures must never reach the cluster
    validate_name(&req.name)?;
    validate_name(&req.target)?;

    let selector = PodSelector::labels(&namespace, canonical_labels(&req.target));
    let experiment = ChaosExperiment::new(&req.name, &namespace, selector, req.kind)
        .with_duration(req.duration);
    let kind = experiment.kind().as_str();

    let k8s = state.k8s().await?;
    let chaos = ChaosClient::new(k8s.inner().clone());
    let created = chaos.create_experiment(&experiment).await?;

    Ok(Json(serde_json::json!({
        "created": created,
        "kind": kind,
        "namespace": namespace
    })))
}

/// Delete a chaos experiment
#[utoipa::path(
    delete,
    path = "/api/namespaces/{namespace}/chaos/{kind}/{name}",
    tag = "chaos",
    params(
        ("namespace" = String, Path, description = "Namespace"),
        ("kind" = String, Path, description = "CRD kind, e.g. PodChaos"),
        ("name" = String, Path, description = "Experiment name"),
    ),
    responses(
        (status = 200, description = "Experiment deleted"),
        (status = 400, description = "Unknown experiment kind"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path((namespace, kind, name)): Path<(String, String, String)>,
) -> AppResult<Json<serde_json::Value>> {
    info!(
        "Deleting chaos experiment {} ({}) in namespace {}",
        name, kind, namespace
    );

    let crd_kind = kind
        .parse()
        .map_err(|e: String| AppError::invalid_request(&e))?;

    let k8s = state.k8s().await?;
    let chaos = ChaosClient::new(k8s.inner().clone());
    chaos.delete_experiment(&namespace, crd_kind, &name).await?;

    Ok(Json(serde_json::json!({
        "deleted": name,
        "kind": kind,
        "namespace": namespace
    })))
}
