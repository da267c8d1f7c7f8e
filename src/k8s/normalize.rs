//! Cluster state normalization
//!
//! Converts the verbose objects the API server returns into the compact
//! records the dashboard renders. Pods and nodes are routinely missing whole
//! sub-objects while they start or terminate; a missing sub-object simply
//! leaves its fields unset.

use k8s_openapi::api::core::v1::{Node, Pod};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use chrono::SecondsFormat;

use crate::models::{ContainerSummary, NodeSummaryResponse, PodStatusResponse};

/// Render a cluster timestamp as RFC 3339 UTC, second precision
fn format_timestamp(time: &Time) -> String {
    time.0.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Normalize a single pod
pub fn normalize_pod(pod: &Pod) -> PodStatusResponse {
    let mut resp = PodStatusResponse::default();

    let metadata = &pod.metadata;
    resp.pod_name = metadata.name.clone();
    resp.creation_timestamp = metadata.creation_timestamp.as_ref().map(format_timestamp);

    if let Some(status) = &pod.status {
        resp.host_ip = status.host_ip.clone();
        resp.start_time = status.start_time.as_ref().map(format_timestamp);
    }

    if let Some(spec) = &pod.spec {
        resp.node_selector = spec.node_selector.clone();
        resp.container_info_list = spec
            .containers
            .iter()
            .map(|c| ContainerSummary {
                name: if c.name.is_empty() {
                    None
                } else {
                    Some(c.name.clone())
                },
                image: c.image.clone(),
            })
            .collect();
    }

    resp
}

/// Normalize a pod listing, preserving upstream order
pub fn normalize_pod_list(pods: &[Pod]) -> Vec<PodStatusResponse> {
    pods.iter().map(normalize_pod).collect()
}

/// Normalize a single node
pub fn normalize_node(node: &Node) -> NodeSummaryResponse {
    let mut resp = NodeSummaryResponse::default();

    let metadata = &node.metadata;
    resp.node_name = metadata.name.clone();
    resp.creation_timestamp = metadata.creation_timestamp.as_ref().map(format_timestamp);

    if let Some(info) = node.status.as_ref().and_then(|s| s.node_info.as_ref()) {
        resp.kubelet_version = Some(info.kubelet_version.clone());
        resp.os_image = Some(info.os_image.clone());
        resp.architecture = Some(info.architecture.clone());
    }

    resp
}
