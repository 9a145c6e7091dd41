//! Server configuration and run loop

use crate::api::{self, AppState};
use anyhow::Result;
use neowatch_data::NeoClient;
use std::path::PathBuf;
use std::sync::Arc;

/// Dashboard API server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// NASA API key for the NeoWs feed
    pub api_key: String,
    /// Optional directory holding the built web client
    pub static_dir: Option<PathBuf>,
    /// Seed for the synthetic risk timeline
    pub timeline_seed: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7878,
            api_key: std::env::var("NASA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string()),
            static_dir: None,
            timeline_seed: 42,
        }
    }
}

/// Run the dashboard API server until shutdown
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting neowatch API server on port {}", config.port);

    let state = Arc::new(AppState {
        neo: NeoClient::new(config.api_key.clone()),
        timeline_seed: config.timeline_seed,
    });

    let app = api::create_router(state, config.static_dir.clone());
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server ready at http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
