//! Kubernetes manifest builders for KubeDash
//!
//! Pure functions turning a `CreateWorkloadRequest` into Pod and Deployment
//! manifests. Nothing here talks to the cluster; the client layer submits
//! whatever these return.

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, EnvVar, LocalObjectReference, Pod, PodSpec, PodTemplateSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};
use crate::models::CreateWorkloadRequest;

/// Manager label stamped on every resource this service creates
pub const MANAGED_BY: &str = "kubedash";

/// Canonical labels for a resource name
///
/// The same mapping is used for resource metadata and for deployment
/// selectors, so selector/label agreement holds by construction.
pub fn canonical_labels(name: &str) -> BTreeMap<String, String> {
    [
        ("app.kubernetes.io/name".to_string(), name.to_string()),
        (
            "app.kubernetes.io/managed-by".to_string(),
            MANAGED_BY.to_string(),
        ),
    ]
    .into_iter()
    .collect()
}

/// Validate that a resource name is a DNS label (RFC 1123)
pub fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::invalid_request("name must not be empty"));
    }
    if name.len() > 63 {
        return Err(AppError::invalid_request(
            "name must be at most 63 characters",
        ));
    }
    let label_safe = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !name.starts_with('-')
        && !name.ends_with('-');
    if !label_safe {
        return Err(AppError::invalid_request(
            "name must be a valid DNS label (lowercase alphanumeric or '-')",
        ));
    }
    Ok(())
}

/// Build a Pod manifest from a workload request
pub fn build_pod_manifest(namespace: &str, req: &CreateWorkloadRequest) -> AppResult<Pod> {
    validate_name(&req.name)?;

    Ok(Pod {
        metadata: build_metadata(namespace, &req.name),
        spec: Some(PodSpec {
            containers: vec![build_container(req)],
            // TODO: nodeName mirrors the workload name; make placement an
            // explicit request field instead
            node_name: Some(req.name.clone()),
            image_pull_secrets: build_pull_secrets(req.image_pull_secret.as_deref()),
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Build a Deployment manifest from a workload request
///
/// The pod template carries the same canonical labels as the selector, one
/// nesting level deeper than the pod manifest.
pub fn build_deployment_manifest(
    namespace: &str,
    req: &CreateWorkloadRequest,
) -> AppResult<Deployment> {
    validate_name(&req.name)?;
    if let Some(replicas) = req.replicas {
        if replicas <= 0 {
            return Err(AppError::invalid_request("replicas must be positive"));
        }
    }

    let labels = canonical_labels(&req.name);

    Ok(Deployment {
        metadata: build_metadata(namespace, &req.name),
        spec: Some(DeploymentSpec {
            replicas: req.replicas,
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![build_container(req)],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Metadata shared by pod and deployment manifests
fn build_metadata(namespace: &str, name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(namespace.to_string()),
        labels: Some(canonical_labels(name)),
        ..Default::default()
    }
}

/// Single-container spec from image and environment
fn build_container(req: &CreateWorkloadRequest) -> Container {
    let env: Vec<EnvVar> = req
        .env
        .iter()
        .map(|e| EnvVar {
            name: e.name.clone(),
            value: Some(e.value.clone()),
            ..Default::default()
        })
        .collect();

    Container {
        name: req.name.clone(),
        image: Some(req.image.clone()),
        env: if env.is_empty() { None } else { Some(env) },
        ..Default::default()
    }
}

/// Pull secret reference list; empty or absent secret names yield none
fn build_pull_secrets(secret: Option<&str>) -> Option<Vec<LocalObjectReference>> {
    match secret {
        Some(name) if !name.is_empty() => Some(vec![LocalObjectReference {
            name: Some(name.to_string()),
        }]),
        _ => None,
    }
}
