//! Workload creation requests
//!
//! The simplified, dashboard-facing description of a pod or deployment. The
//! translators in `k8s::resources` turn these into full manifests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An environment variable entry; order is preserved into the container spec
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnvPair {
    pub name: String,
    pub value: String,
}

/// Request to create a pod or deployment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkloadRequest {
    /// Resource name; must be a valid DNS label
    pub name: String,
    /// Container image reference
    pub image: String,
    /// Environment variables for the single container
    #[serde(default)]
    pub env: Vec<EnvPair>,
    /// Name of the image pull secret; no pull secret is attached when absent
    #[serde(default)]
    pub image_pull_secret: Option<String>,
    /// Replica count, deployments only; must be positive when present
    #[serde(default)]
    pub replicas: Option<i32>,
}
