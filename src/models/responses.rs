//! Compact response records for the dashboard
//!
//! Cluster objects are frequently only partially populated while they are
//! being created or torn down, so every field here is optional. A field is
//! set only when the upstream object carries it; nothing is defaulted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Summary of one container inside a pod
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Compact view of a pod
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodStatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_name: Option<String>,
    /// RFC 3339 timestamp, UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,
    /// RFC 3339 timestamp, UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub container_info_list: Vec<ContainerSummary>,
}

/// Compact view of a cluster node
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummaryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubelet_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let resp = PodStatusResponse {
            pod_name: Some("web-1".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["podName"], "web-1");
        assert!(json.get("hostIp").is_none());
        assert!(json.get("startTime").is_none());
        assert!(json.get("nodeSelector").is_none());
        assert_eq!(json["containerInfoList"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_node_summary_serialization() {
        let resp = NodeSummaryResponse {
            node_name: Some("worker-0".to_string()),
            kubelet_version: Some("v1.28.3".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["nodeName"], "worker-0");
        assert_eq!(json["kubeletVersion"], "v1.28.3");
        assert!(json.get("osImage").is_none());
    }
}
