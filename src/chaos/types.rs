//! Chaos experiment kinds and parameter payloads
//!
//! The experiment kind and its parameters travel together in one tagged
//! enum, so a kind can never be paired with another kind's payload and there
//! is no way to build an experiment without naming its kind.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parameters for pod kill (PodChaos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodKillParams {
    /// Grace period in seconds before killing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_period: Option<i64>,
}

/// Parameters for network delay (NetworkChaos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct NetworkDelayParams {
    /// Latency to add (e.g., "100ms", "1s")
    pub latency: String,
    /// Random jitter (e.g., "10ms")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter: Option<String>,
    /// Correlation percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation: Option<String>,
}

/// Parameters for I/O fault injection (IOChaos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct IoFaultParams {
    /// Errno returned to the faulted operations (e.g., 5 for EIO)
    pub errno: u32,
    /// Path to affect (default: all paths in the volume)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Percentage of operations to fault (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<u32>,
    /// I/O methods to affect (read, write, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
}

/// Parameters for CPU stress (StressChaos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct StressCpuParams {
    /// Number of CPU stress workers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<u32>,
    /// CPU load percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<u32>,
}

/// An experiment kind together with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "params", rename_all = "kebab-case")]
pub enum ExperimentKind {
    /// Kill the selected pods
    PodKill(PodKillParams),
    /// Add latency to the selected pods' traffic
    NetworkDelay(NetworkDelayParams),
    /// Fail filesystem operations inside the selected pods
    IoFault(IoFaultParams),
    /// Load the selected pods' CPUs
    StressCpu(StressCpuParams),
}

/// Kind of Chaos Mesh CRD an experiment materializes as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentCrdKind {
    PodChaos,
    NetworkChaos,
    IoChaos,
    StressChaos,
}

impl ExperimentCrdKind {
    /// CRD `kind` field value
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentCrdKind::PodChaos => "PodChaos",
            ExperimentCrdKind::NetworkChaos => "NetworkChaos",
            ExperimentCrdKind::IoChaos => "IOChaos",
            ExperimentCrdKind::StressChaos => "StressChaos",
        }
    }

    /// CRD plural, as registered by Chaos Mesh
    pub fn plural(&self) -> &'static str {
        match self {
            ExperimentCrdKind::PodChaos => "podchaos",
            ExperimentCrdKind::NetworkChaos => "networkchaos",
            ExperimentCrdKind::IoChaos => "iochaos",
            ExperimentCrdKind::StressChaos => "stresschaos",
        }
    }
}

impl std::str::FromStr for ExperimentCrdKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PodChaos" => Ok(ExperimentCrdKind::PodChaos),
            "NetworkChaos" => Ok(ExperimentCrdKind::NetworkChaos),
            "IOChaos" => Ok(ExperimentCrdKind::IoChaos),
            "StressChaos" => Ok(ExperimentCrdKind::StressChaos),
            _ => Err(format!("Unknown experiment kind: {}", s)),
        }
    }
}

impl Serialize for ExperimentCrdKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExperimentCrdKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl ExperimentKind {
    /// The CRD kind this experiment materializes as
    pub fn crd_kind(&self) -> ExperimentCrdKind {
        match self {
            ExperimentKind::PodKill(_) => ExperimentCrdKind::PodChaos,
            ExperimentKind::NetworkDelay(_) => ExperimentCrdKind::NetworkChaos,
            ExperimentKind::IoFault(_) => ExperimentCrdKind::IoChaos,
            ExperimentKind::StressCpu(_) => ExperimentCrdKind::StressChaos,
        }
    }

    /// The `spec.action` value, where the CRD has one
    pub fn action(&self) -> Option<&'static str> {
        match self {
            ExperimentKind::PodKill(_) => Some("pod-kill"),
            ExperimentKind::NetworkDelay(_) => Some("delay"),
            ExperimentKind::IoFault(_) => Some("fault"),
            // StressChaos has no action field; stressors carry the load
            ExperimentKind::StressCpu(_) => None,
        }
    }
}

impl std::fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperimentKind::PodKill(_) => write!(f, "pod-kill"),
            ExperimentKind::NetworkDelay(_) => write!(f, "network-delay"),
            ExperimentKind::IoFault(_) => write!(f, "io-fault"),
            ExperimentKind::StressCpu(_) => write!(f, "stress-cpu"),
        }
    }
}

/// Request to create a chaos experiment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperimentRequest {
    /// Name for the experiment resource
    pub name: String,
    /// Workload the experiment targets; pods are selected by the same
    /// canonical labels the manifest builders stamp on
    pub target: String,
    /// Experiment kind with its parameters
    #[serde(flatten)]
    pub kind: ExperimentKind,
    /// Duration (e.g., "60s", "5m"); runs until deleted when absent
    #[serde(default)]
    pub duration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiment_kind_display() {
        assert_eq!(
            ExperimentKind::PodKill(PodKillParams::default()).to_string(),
            "pod-kill"
        );
        assert_eq!(
            ExperimentKind::NetworkDelay(NetworkDelayParams::default()).to_string(),
            "network-delay"
        );
        assert_eq!(
            ExperimentKind::IoFault(IoFaultParams::default()).to_string(),
            "io-fault"
        );
        assert_eq!(
            ExperimentKind::StressCpu(StressCpuParams::default()).to_string(),
            "stress-cpu"
        );
    }

    #[test]
    fn test_crd_kind_mapping() {
        assert_eq!(
            ExperimentKind::PodKill(PodKillParams::default())
                .crd_kind()
                .as_str(),
            "PodChaos"
        );
        assert_eq!(
            ExperimentKind::NetworkDelay(NetworkDelayParams::default())
                .crd_kind()
                .plural(),
            "networkchaos"
        );
    }

    #[test]
    fn test_crd_kind_parse() {
        assert_eq!(
            "IOChaos".parse::<ExperimentCrdKind>().unwrap(),
            ExperimentCrdKind::IoChaos
        );
        assert!("FlakyChaos".parse::<ExperimentCrdKind>().is_err());
    }

    #[test]
    fn test_kind_and_params_deserialize_together() {
        let json_str = r#"{
            "kind": "network-delay",
            "params": {"latency": "100ms", "jitter": "10ms"}
        }"#;

        let kind: ExperimentKind = serde_json::from_str(json_str).unwrap();
        match kind {
            ExperimentKind::NetworkDelay(params) => {
                assert_eq!(params.latency, "100ms");
                assert_eq!(params.jitter, Some("10ms".to_string()));
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_kind_without_discriminant_rejected() {
        // a payload alone never deserializes into an experiment kind
        let json_str = r#"{"params": {"latency": "100ms"}}"#;
        assert!(serde_json::from_str::<ExperimentKind>(json_str).is_err());
    }

    #[test]
    fn test_create_experiment_request() {
        let json_str = r#"{
            "name": "kill-web",
            "target": "web",
            "kind": "pod-kill",
            "params": {"gracePeriod": 0},
            "duration": "60s"
        }"#;

        let req: CreateExperimentRequest = serde_json::from_str(json_str).unwrap();
        assert_eq!(req.name, "kill-web");
        assert_eq!(req.target, "web");
        assert_eq!(req.duration, Some("60s".to_string()));
        assert!(matches!(req.kind, ExperimentKind::PodKill(_)));
    }
}
