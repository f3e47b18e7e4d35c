mod api;
mod config;
mod errors;
mod providers;
mod schema;

use api::{ApiServer, AppState};
use config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(
        "Calcio starting on port {} (season {}, country {})",
        config.api_port,
        config.defaults.season,
        config.defaults.country_code
    );
    tracing::debug!("api-football: {:?}", config.api_football);
    tracing::debug!("football-data: {:?}", config.football_data);

    let state = AppState::from_config(&config)?;
    ApiServer::new(state).run(&config).await
}
