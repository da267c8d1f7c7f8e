//! Chaos Mesh experiment manifests
//!
//! Builds the custom resources Chaos Mesh consumes. The `apiVersion` is a
//! schema constant and the CRD kind is fixed by the `ExperimentKind` variant
//! at construction; neither can be set by the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::{ExperimentCrdKind, ExperimentKind};

/// Chaos Mesh CRD schema version
pub const CHAOS_MESH_API_VERSION: &str = "chaos-mesh.org/v1alpha1";

/// Chaos Mesh CRD API group
pub const CHAOS_MESH_GROUP: &str = "chaos-mesh.org";

/// Chaos Mesh CRD API version within the group
pub const CHAOS_MESH_VERSION: &str = "v1alpha1";

/// Pod selector structure matching the Chaos Mesh CRDs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_selectors: Option<BTreeMap<String, String>>,
}

impl PodSelector {
    /// Select pods in one namespace by label set
    pub fn labels(namespace: &str, labels: BTreeMap<String, String>) -> Self {
        Self {
            namespaces: Some(vec![namespace.to_string()]),
            label_selectors: Some(labels),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentMetadata {
    pub name: String,
    pub namespace: String,
}

/// CPU stressor block (StressChaos)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuStressor {
    pub workers: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stressors {
    pub cpu: CpuStressor,
}

/// The spec body shared by the supported Chaos Mesh CRDs
///
/// Exactly the fields of the constructing variant are serialized; everything
/// else is skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub mode: String,
    pub selector: PodSelector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    // PodChaos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period: Option<i64>,

    // NetworkChaos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<super::types::NetworkDelayParams>,

    // IOChaos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errno: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,

    // StressChaos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stressors: Option<Stressors>,
}

/// A chaos experiment manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaosExperiment {
    api_version: String,
    kind: ExperimentCrdKind,
    pub metadata: ExperimentMetadata,
    pub spec: ExperimentSpec,
}

impl ChaosExperiment {
    /// Build an experiment of the given kind targeting the selected pods
    pub fn new(name: &str, namespace: &str, selector: PodSelector, kind: ExperimentKind) -> Self {
        let crd_kind = kind.crd_kind();
        let mut spec = ExperimentSpec {
            action: kind.action().map(str::to_string),
            mode: "all".to_string(),
            selector,
            duration: None,
            grace_period: None,
            delay: None,
            errno: None,
            path: None,
            percent: None,
            methods: None,
            stressors: None,
        };

        match kind {
            ExperimentKind::PodKill(params) => {
                spec.grace_period = params.grace_period;
            }
            ExperimentKind::NetworkDelay(params) => {
                spec.delay = Some(params);
            }
            ExperimentKind::IoFault(params) => {
                spec.errno = Some(params.errno);
                spec.path = params.path;
                spec.percent = params.percent;
                spec.methods = params.methods;
            }
            ExperimentKind::StressCpu(params) => {
                spec.stressors = Some(Stressors {
                    cpu: CpuStressor {
                        workers: params.workers.unwrap_or(1),
                        load: params.load,
                    },
                });
            }
        }

        Self {
            api_version: CHAOS_MESH_API_VERSION.to_string(),
            kind: crd_kind,
            metadata: ExperimentMetadata {
                name: name.to_string(),
                namespace: namespace.to_string(),
            },
            spec,
        }
    }

    /// Attach a duration; the experiment runs until deleted otherwise
    pub fn with_duration(mut self, duration: Option<String>) -> Self {
        self.spec.duration = duration;
        self
    }

    /// The fixed schema version
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// The CRD kind fixed at construction
    pub fn kind(&self) -> ExperimentCrdKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chaos::types::{NetworkDelayParams, PodKillParams, StressCpuParams};

    fn selector() -> PodSelector {
        PodSelector::labels(
            "staging",
            [("app.kubernetes.io/name".to_string(), "web".to_string())]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn test_pod_kill_experiment() {
        let exp = ChaosExperiment::new(
            "kill-web",
            "staging",
            selector(),
            ExperimentKind::PodKill(PodKillParams {
                grace_period: Some(0),
            }),
        );

        assert_eq!(exp.api_version(), "chaos-mesh.org/v1alpha1");
        assert_eq!(exp.kind().as_str(), "PodChaos");

        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["apiVersion"], "chaos-mesh.org/v1alpha1");
        assert_eq!(json["kind"], "PodChaos");
        assert_eq!(json["metadata"]["name"], "kill-web");
        assert_eq!(json["metadata"]["namespace"], "staging");
        assert_eq!(json["spec"]["action"], "pod-kill");
        assert_eq!(json["spec"]["gracePeriod"], 0);
        // no other variant's payload leaks into the spec
        assert!(json["spec"].get("delay").is_none());
        assert!(json["spec"].get("stressors").is_none());
    }

    #[test]
    fn test_network_delay_experiment() {
        let exp = ChaosExperiment::new(
            "slow-web",
            "staging",
            selector(),
            ExperimentKind::NetworkDelay(NetworkDelayParams {
                latency: "200ms".to_string(),
                jitter: Some("50ms".to_string()),
                correlation: None,
            }),
        )
        .with_duration(Some("60s".to_string()));

        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["kind"], "NetworkChaos");
        assert_eq!(json["spec"]["action"], "delay");
        assert_eq!(json["spec"]["delay"]["latency"], "200ms");
        assert_eq!(json["spec"]["delay"]["jitter"], "50ms");
        assert_eq!(json["spec"]["duration"], "60s");
        assert_eq!(
            json["spec"]["selector"]["labelSelectors"]["app.kubernetes.io/name"],
            "web"
        );
    }

    #[test]
    fn test_stress_cpu_experiment_has_no_action() {
        let exp = ChaosExperiment::new(
            "stress-web",
            "staging",
            selector(),
            ExperimentKind::StressCpu(StressCpuParams {
                workers: Some(2),
                load: Some(80),
            }),
        );

        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["kind"], "StressChaos");
        assert!(json["spec"].get("action").is_none());
        assert_eq!(json["spec"]["stressors"]["cpu"]["workers"], 2);
        assert_eq!(json["spec"]["stressors"]["cpu"]["load"], 80);
    }

    #[test]
    fn test_api_version_fixed_for_every_kind() {
        let kinds = vec![
            ExperimentKind::PodKill(PodKillParams::default()),
            ExperimentKind::NetworkDelay(NetworkDelayParams::default()),
            ExperimentKind::StressCpu(StressCpuParams::default()),
        ];

        for kind in kinds {
            let exp = ChaosExperiment::new("e", "default", selector(), kind);
            assert_eq!(exp.api_version(), CHAOS_MESH_API_VERSION);
        }
    }
}
