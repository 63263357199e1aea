//! Toll gate service
//!
//! Reads configuration from a TOML file (`$TOLL_GATE_CONFIG`, else
//! `~/.config/toll-gate/config.toml`) and serves the REST API until
//! SIGINT/SIGTERM.

use std::path::PathBuf;

use tollgate::config::{AppConfig, CONFIG_ENV_VAR};
use tollgate::default_config_path;
use tollgate::server::{init_tracing, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path());

    let config = AppConfig::load(&config_path)?;
    init_tracing(&config);
    tracing::info!("Configuration loaded from {}", config_path.display());

    let handle = ServerHandle::start(ServerOptions {
        config,
        ..ServerOptions::default()
    })
    .await?;

    handle.install_signal_handler();
    handle.wait().await;
    Ok(())
}
