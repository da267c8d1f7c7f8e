//! OpenAPI documentation for the KubeDash API
//!
//! This module provides Swagger/OpenAPI documentation for all API endpoints.

use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "KubeDash API",
        version = "1.0.0",
        description = "Kubernetes dashboard backend.\n\n## Features\n- Create pods and deployments from simplified workload requests\n- Compact pod and node listings\n- Chaos Mesh experiments (pod kill, network delay, I/O fault, CPU stress)",
        license(name = "MIT"),
        contact(name = "KubeDash Team")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "pods", description = "Pod management - create, list, delete"),
        (name = "deployments", description = "Deployment management"),
        (name = "nodes", description = "Cluster node listings"),
        (name = "chaos", description = "Chaos engineering - inject faults into workloads"),
        (name = "cluster", description = "Kubernetes cluster status")
    ),
    paths(
        // Pods
        crate::api::pods::create,
        crate::api::pods::list,
        crate::api::pods::delete,
        // Deployments
        crate::api::deployments::create,
        crate::api::deployments::delete,
        // Nodes
        crate::api::nodes::list,
        // Chaos
        crate::api::chaos::create,
        crate::api::chaos::delete,
        // Cluster
        crate::api::health::cluster_status,
    ),
    components(schemas(
        crate::models::CreateWorkloadRequest,
        crate::models::EnvPair,
        crate::models::PodStatusResponse,
        crate::models::ContainerSummary,
        crate::models::NodeSummaryResponse,
        crate::chaos::CreateExperimentRequest,
        crate::chaos::ExperimentKind,
        crate::chaos::PodKillParams,
        crate::chaos::NetworkDelayParams,
        crate::chaos::IoFaultParams,
        crate::chaos::StressCpuParams,
        crate::api::health::ClusterStatusResponse,
    ))
)]
pub struct ApiDoc;
