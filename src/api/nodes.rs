//! Node API endpoints

use axum::{extract::State, Json};

use crate::api::AppState;
use crate::error::AppResult;
use crate::k8s::normalize_node;
use crate::models::NodeSummaryResponse;

/// List cluster nodes
#[utoipa::path(
    get,
    path = "/api/nodes",
    tag = "nodes",
    responses(
        (status = 200, description = "Cluster nodes", body = [NodeSummaryResponse]),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NodeSummaryResponse>>> {
    let k8s = state.k8s().await?;
    let nodes = k8s.list_nodes().await?;

    Ok(Json(nodes.iter().map(normalize_node).collect()))
}
