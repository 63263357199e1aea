//! Toll gate CLI server
//!
//! ```sh
//! # Run with default config (~/.config/toll-gate/config.toml)
//! toll-gate
//!
//! # Custom config path and port
//! toll-gate --config /etc/toll-gate/config.toml --port 8080
//!
//! # Validate config without starting
//! toll-gate --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use tollgate::config::{AppConfig, CONFIG_ENV_VAR};
use tollgate::server::{init_tracing, ServerHandle, ServerOptions};

/// Motorway toll gate billing service.
#[derive(Parser, Debug)]
#[command(
    name = "toll-gate",
    version,
    about = "Distance-based motorway toll billing service",
    long_about = "REST API for recording vehicle entries and exits at motorway \
                  interchanges and charging the toll on exit.\n\n\
                  Default config: ~/.config/toll-gate/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(tollgate::default_config_path);

    let mut config = AppConfig::load(&config_path)?;
    cli.apply_overrides(&mut config);

    if cli.check {
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}:{}", config.server.host, config.server.port);
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {} ({})", config.logging.level, config.logging.format);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;
    Ok(())
}
