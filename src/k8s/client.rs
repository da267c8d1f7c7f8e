//! Kubernetes client wrapper for KubeDash

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::{
    api::{Api, DeleteParams, ListParams, PostParams},
    Client, Config,
};
use tracing::{info, instrument};

use crate::error::{AppError, AppResult};

/// Wrapper around kube::Client with helper methods for dashboard operations
///
/// Namespace is chosen per call; the dashboard serves all namespaces.
#[derive(Clone)]
pub struct K8sClient {
    client: Client,
}

impl K8sClient {
    /// Create a new K8sClient using the default kubeconfig or in-cluster config
    #[instrument(skip_all)]
    pub async fn new() -> AppResult<Self> {
        let config = Config::infer()
            .await
            .map_err(|e| AppError::internal(&format!("Failed to infer Kubernetes config: {}", e)))?;
        let client = Client::try_from(config)?;

        info!("Connected to Kubernetes cluster");

        Ok(Self { client })
    }

    /// Get the inner kube Client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get a typed API for pods in a namespace
    pub fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Get a typed API for deployments in a namespace
    pub fn deployments(&self, namespace: &str) -> Api<Deployment> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Get a typed API for cluster nodes
    pub fn nodes(&self) -> Api<Node> {
        Api::all(self.client.clone())
    }

    /// Create a pod
    #[instrument(skip(self, pod), fields(pod_name = %pod.metadata.name.as_deref().unwrap_or("unknown")))]
    pub async fn create_pod(&self, namespace: &str, pod: &Pod) -> AppResult<Pod> {
        let pods = self.pods(namespace);
        let created = pods.create(&PostParams::default(), pod).await?;
        info!("Created pod");
        Ok(created)
    }

    /// Delete a pod
    #[instrument(skip(self))]
    pub async fn delete_pod(&self, namespace: &str, name: &str) -> AppResult<()> {
        let pods = self.pods(namespace);
        pods.delete(name, &DeleteParams::default()).await?;
        info!(name, "Deleted pod");
        Ok(())
    }

    /// List pods in a namespace
    pub async fn list_pods(&self, namespace: &str) -> AppResult<Vec<Pod>> {
        let pods = self.pods(namespace);
        let list = pods.list(&ListParams::default()).await?;
        Ok(list.items)
    }

    /// List cluster nodes
    pub async fn list_nodes(&self) -> AppResult<Vec<Node>> {
        let nodes = self.nodes();
        let list = nodes.list(&ListParams::default()).await?;
        Ok(list.items)
    }

    /// Create a deployment
    #[instrument(skip(self, deployment), fields(deployment_name = %deployment.metadata.name.as_deref().unwrap_or("unknown")))]
    pub async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> AppResult<Deployment> {
        let api = self.deployments(namespace);
        let created = api.create(&PostParams::default(), deployment).await?;
        info!("Created deployment");
        Ok(created)
    }

    /// Delete a deployment
    #[instrument(skip(self))]
    pub async fn delete_deployment(&self, namespace: &str, name: &str) -> AppResult<()> {
        let api = self.deployments(namespace);
        api.delete(name, &DeleteParams::default()).await?;
        info!(name, "Deleted deployment");
        Ok(())
    }

    /// Check if the cluster is reachable
    pub async fn health_check(&self) -> AppResult<bool> {
        let version = self.client.apiserver_version().await?;
        info!(version = %version.git_version, "Kubernetes cluster is healthy");
        Ok(true)
    }
}
