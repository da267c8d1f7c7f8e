//! Chaos Mesh Kubernetes client
//!
//! Submits and deletes chaos-experiment CRDs. The manifest construction lives
//! in `experiment`; this layer only moves the finished objects.

use kube::{
    api::{Api, DeleteParams, DynamicObject, PostParams},
    discovery::ApiResource,
    Client,
};
use tracing::{error, info, warn};

use super::experiment::{ChaosExperiment, CHAOS_MESH_API_VERSION, CHAOS_MESH_GROUP, CHAOS_MESH_VERSION};
use super::types::ExperimentCrdKind;
use crate::error::{AppError, AppResult};

/// Chaos Mesh API client wrapper
#[derive(Clone)]
pub struct ChaosClient {
    client: Client,
}

impl ChaosClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str, kind: ExperimentCrdKind) -> Api<DynamicObject> {
        let ar = ApiResource {
            group: CHAOS_MESH_GROUP.to_string(),
            version: CHAOS_MESH_VERSION.to_string(),
            api_version: CHAOS_MESH_API_VERSION.to_string(),
            kind: kind.as_str().to_string(),
            plural: kind.plural().to_string(),
        };
        Api::namespaced_with(self.client.clone(), namespace, &ar)
    }

    /// Submit an experiment to the cluster
    pub async fn create_experiment(&self, experiment: &ChaosExperiment) -> AppResult<String> {
        let kind = experiment.kind();
        let name = experiment.metadata.name.clone();
        let namespace = experiment.metadata.namespace.clone();

        info!(
            "Creating {} '{}' in namespace {}",
            kind.as_str(),
            name,
            namespace
        );

        let api = self.api(&namespace, kind);

        let obj: DynamicObject = serde_json::to_value(experiment)
            .and_then(serde_json::from_value)
            .map_err(|e| {
                AppError::internal(&format!("Failed to convert experiment: {}", e))
            })?;

        match api.create(&PostParams::default(), &obj).await {
            Ok(created) => {
                let created_name = created.metadata.name.unwrap_or(name);
                info!("Created {}: {}", kind.as_str(), created_name);
                Ok(created_name)
            }
            Err(e) => {
                error!("Failed to create {}: {}", kind.as_str(), e);
                Err(e.into())
            }
        }
    }

    /// Delete an experiment; a missing resource is not an error
    pub async fn delete_experiment(
        &self,
        namespace: &str,
        kind: ExperimentCrdKind,
        name: &str,
    ) -> AppResult<()> {
        info!("Deleting {} '{}'", kind.as_str(), name);

        let api = self.api(namespace, kind);

        match api.delete(name, &DeleteParams::default()).await {
            Ok(_) => {
                info!("Deleted {}: {}", kind.as_str(), name);
                Ok(())
            }
            Err(kube::Error::Api(ae)) if ae.code == 404 => {
                warn!("{} '{}' not found (already deleted?)", kind.as_str(), name);
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete {}: {}", kind.as_str(), e);
                Err(e.into())
            }
        }
    }
}
