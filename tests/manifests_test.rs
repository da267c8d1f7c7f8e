//! Tests for manifest builders
//!
//! These tests verify pod/deployment translation and the canonical labeling
//! shared between resource metadata and deployment selectors.

use kubedash_backend::k8s::{
    build_deployment_manifest, build_pod_manifest, canonical_labels,
};
use kubedash_backend::models::{CreateWorkloadRequest, EnvPair};

fn request(name: &str) -> CreateWorkloadRequest {
    CreateWorkloadRequest {
        name: name.to_string(),
        image: "busybox".to_string(),
        env: vec![],
        image_pull_secret: None,
        replicas: None,
    }
}

#[test]
fn test_pod_labels_match_canonical_labels() {
    let pod = build_pod_manifest("default", &request("job-7")).unwrap();
    assert_eq!(pod.metadata.labels, Some(canonical_labels("job-7")));

    let spec = pod.spec.unwrap();
    assert_eq!(spec.containers.len(), 1);
    assert_eq!(spec.containers[0].image, Some("busybox".to_string()));
}

#[test]
fn test_pod_without_pull_secret_has_no_entries() {
    let pod = build_pod_manifest("ns", &request("job-7")).unwrap();
    assert_eq!(pod.spec.unwrap().image_pull_secrets, None);
}

#[test]
fn test_pod_with_pull_secret_has_exactly_one_entry() {
    let mut req = request("job-7");
    req.image_pull_secret = Some("registry-cred".to_string());

    let pod = build_pod_manifest("ns", &req).unwrap();
    let secrets = pod.spec.unwrap().image_pull_secrets.unwrap();
    assert_eq!(secrets.len(), 1);
    assert_eq!(secrets[0].name, Some("registry-cred".to_string()));
}

#[test]
fn test_deployment_selector_label_agreement() {
    let mut req = request("web");
    req.replicas = Some(2);

    let deployment = build_deployment_manifest("prod", &req).unwrap();
    let spec = deployment.spec.unwrap();

    // metadata labels, selector, and template labels are the same mapping
    let expected = canonical_labels("web");
    assert_eq!(deployment.metadata.labels, Some(expected.clone()));
    assert_eq!(spec.selector.match_labels, Some(expected.clone()));
    assert_eq!(spec.template.metadata.unwrap().labels, Some(expected));
    assert_eq!(spec.replicas, Some(2));
}

#[test]
fn test_deployment_template_nests_container_spec() {
    let mut req = request("web");
    req.env = vec![EnvPair {
        name: "MODE".to_string(),
        value: "prod".to_string(),
    }];

    let deployment = build_deployment_manifest("prod", &req).unwrap();
    let template_spec = deployment.spec.unwrap().template.spec.unwrap();

    assert_eq!(template_spec.containers.len(), 1);
    let env = template_spec.containers[0].env.clone().unwrap();
    assert_eq!(env[0].name, "MODE");
    assert_eq!(env[0].value, Some("prod".to_string()));
}

#[test]
fn test_canonical_labels_deterministic() {
    assert_eq!(canonical_labels("web"), canonical_labels("web"));
    assert_ne!(canonical_labels("web"), canonical_labels("db"));
}

#[test]
fn test_invalid_name_fails_before_any_call() {
    for bad in ["", "UPPER", "has space", "under_score"] {
        let err = build_pod_manifest("ns", &request(bad)).unwrap_err();
        assert!(
            err.to_string().starts_with("invalid request"),
            "unexpected error for {:?}: {}",
            bad,
            err
        );
    }
}
