//! Dashboard server lifecycle.

use super::routes::create_router;
use super::state::DashboardState;
use crate::pass::PassSummary;
use crate::source::SnapshotSource;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors from the dashboard server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

/// Configuration for the dashboard server.
#[derive(Debug, Clone)]
pub struct DashboardServerConfig {
    /// Address to listen on.
    pub listen_addr: SocketAddr,
}

impl Default for DashboardServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
        }
    }
}

/// Handle for controlling a running server.
pub struct DashboardServerHandle {
    task: JoinHandle<()>,
    local_addr: SocketAddr,
    state: DashboardState,
}

impl DashboardServerHandle {
    /// Address actually bound, useful when listening on port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn last_pass(&self) -> Option<PassSummary> {
        self.state.last_pass()
    }

    /// Abort the server.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Wait for the server to finish.
    pub async fn join(self) -> Result<(), tokio::task::JoinError> {
        self.task.await
    }
}

/// HTTP server for the epoch dashboard.
pub struct DashboardServer {
    config: DashboardServerConfig,
    state: DashboardState,
}

impl DashboardServer {
    pub fn new(config: DashboardServerConfig, source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            config,
            state: DashboardState::new(source),
        }
    }

    /// Start the server and return a handle for control.
    pub async fn start(self) -> Result<DashboardServerHandle, ServerError> {
        let state = self.state.clone();
        let router = create_router(self.state);

        let listener = tokio::net::TcpListener::bind(self.config.listen_addr).await?;
        let local_addr = listener.local_addr()?;
        info!(
            addr = %local_addr,
            source = %state.source.describe(),
            "Dashboard server listening"
        );

        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                error!(error = ?e, "Dashboard server error");
            }
        });

        Ok(DashboardServerHandle {
            task,
            local_addr,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use epochview_test_helpers::fixtures::sample_snapshot;

    fn sample_source() -> Arc<dyn SnapshotSource> {
        Arc::new(StaticSource::new("sample", sample_snapshot()))
    }

    #[test]
    fn test_default_config() {
        let config = DashboardServerConfig::default();
        assert_eq!(config.listen_addr.port(), 3030);
        assert!(config.listen_addr.ip().is_loopback());
    }

    #[tokio::test]
    async fn test_start_on_ephemeral_port() {
        let config = DashboardServerConfig {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        };
        let handle = DashboardServer::new(config, sample_source())
            .start()
            .await
            .unwrap();

        assert_ne!(handle.local_addr().port(), 0);
        assert!(handle.last_pass().is_none());
        handle.abort();
        assert!(handle.join().await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_bind_conflict() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let taken = listener.local_addr().unwrap();

        let config = DashboardServerConfig { listen_addr: taken };
        let result = DashboardServer::new(config, sample_source()).start().await;
        assert!(matches!(result, Err(ServerError::BindError(_))));
    }
}
