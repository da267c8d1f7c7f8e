pub mod chaos;
pub mod deployments;
pub mod health;
pub mod nodes;
pub mod openapi;
pub mod pods;

use crate::config::Config;
use crate::k8s::K8sClient;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    pub k8s: Arc<RwLock<Option<K8sClient>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            k8s: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn set_k8s(&self, k8s: K8sClient) {
        let mut guard = self.k8s.write().await;
        *guard = Some(k8s);
    }

    /// The connected cluster client, or a 502 when no cluster is reachable
    pub async fn k8s(&self) -> AppResult<K8sClient> {
        self.k8s
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::internal("Kubernetes cluster not available"))
    }
}
