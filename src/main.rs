use anyhow::Result;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kubedash_backend::{api::AppState, config::Config, create_router, k8s::K8sClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting KubeDash Backend");

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Configuration loaded");

    // Build application state
    let state = AppState::new(config.clone());

    // Connect to the cluster in the background; endpoints answer 502 until
    // a connection is established and retry keeps running after losses
    let mgr_state = state.clone();
    tokio::spawn(async move {
        loop {
            let needs_connect = mgr_state.k8s.read().await.is_none();

            if needs_connect {
                match K8sClient::new().await {
                    Ok(k8s) => match k8s.health_check().await {
                        Ok(_) => {
                            tracing::info!("Connected to Kubernetes cluster");
                            mgr_state.set_k8s(k8s).await;
                        }
                        Err(e) => {
                            tracing::warn!("K8s client created but unhealthy: {}", e);
                        }
                    },
                    Err(e) => {
                        tracing::debug!("K8s connection attempt failed: {}", e);
                    }
                }
            } else {
                let k8s_opt = mgr_state.k8s.read().await.clone();
                if let Some(k8s) = k8s_opt {
                    if let Err(e) = k8s.health_check().await {
                        tracing::error!("Lost K8s connection: {}. Reconnecting...", e);
                        let mut guard = mgr_state.k8s.write().await;
                        *guard = None;
                    }
                }
            }

            tokio::time::sleep(tokio::time::Duration::from_secs(10)).await;
        }
    });

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
