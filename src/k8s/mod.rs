//! Kubernetes integration module for KubeDash
//!
//! This module covers the cluster-facing half of the dashboard:
//! - Building pod and deployment manifests from workload requests
//! - Normalizing cluster objects into compact dashboard records
//! - A thin client wrapper for create/delete/list calls

mod client;
mod normalize;
mod resources;

pub use client::K8sClient;
pub use normalize::{normalize_node, normalize_pod, normalize_pod_list};
pub use resources::{
    build_deployment_manifest, build_pod_manifest, canonical_labels, validate_name,
};
