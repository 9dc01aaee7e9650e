//! Epoch dashboard server
//!
//! # Usage
//!
//! ```bash
//! # Start with configuration file
//! epochview-server --config dashboard.toml
//!
//! # Serve a different snapshot on another port
//! epochview-server --config dashboard.toml --snapshot /tmp/epoch.json --listen-addr 0.0.0.0:8080
//! ```
//!
//! See `DashboardConfig` for the configuration file format.

use anyhow::{Context, Result};
use clap::Parser;
use epochview_server::logging::init_logging;
use epochview_server::{
    ConfigOverrides, DashboardConfig, DashboardServer, DashboardServerConfig, FileSource,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Epoch dashboard server
///
/// Serves the epoch validators table over HTTP, re-reading the snapshot on
/// every request.
#[derive(Parser, Debug)]
#[command(name = "epochview-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// HTTP listen address (overrides config)
    #[arg(long)]
    listen_addr: Option<SocketAddr>,

    /// Snapshot JSON file (overrides config)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Log level filter, used when RUST_LOG is unset (overrides config)
    #[arg(long)]
    log_level: Option<String>,

    /// Path to log file (redirects all logs to this file)
    #[arg(long)]
    logfile: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            listen_addr: self.listen_addr,
            snapshot_path: self.snapshot.clone(),
            log_level: self.log_level.clone(),
            log_file: self.logfile.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(&cli.config)?;
    config.apply_overrides(&cli.overrides());

    let _log_guard = init_logging(&config.logging)?;

    info!(
        listen_addr = %config.server.listen_addr,
        snapshot = %config.source.snapshot_path.display(),
        "Dashboard configuration loaded"
    );

    let source = Arc::new(FileSource::new(config.source.snapshot_path.clone()));
    let server_config = DashboardServerConfig {
        listen_addr: config.server.listen_addr,
    };
    let handle = DashboardServer::new(server_config, source)
        .start()
        .await
        .context("Failed to start dashboard server")?;

    info!("Dashboard server started, press Ctrl+C to stop");
    shutdown_signal().await;

    handle.abort();
    info!("Dashboard shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
