pub mod handlers;
pub mod models;
pub mod router;

use crate::config::Config;
use crate::errors::ProviderError;
use crate::providers::{ApiFootball, FootballData};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use std::net::SocketAddr;
use std::sync::Arc;

/// Provider clients shared by every handler. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub api_football: Arc<ApiFootball>,
    pub football_data: Arc<FootballData>,
}

impl AppState {
    pub fn new(api_football: ApiFootball, football_data: FootballData) -> Self {
        Self {
            api_football: Arc::new(api_football),
            football_data: Arc::new(football_data),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Ok(Self::new(
            ApiFootball::from_config(&config.api_football, config.defaults.clone())?,
            FootballData::from_config(&config.football_data, config.defaults.clone())?,
        ))
    }
}

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Binds the server to the configured port and serves until Ctrl+C.
    pub async fn run(self, config: &Config) -> anyhow::Result<()> {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

        let app = router::build(self.state)
            .route("/metrics", get(move || async move { metric_handle.render() }))
            .layer(prometheus_layer);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
        tracing::info!("API server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        // keep serving; the process can still be killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
