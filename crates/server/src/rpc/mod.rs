//! HTTP API for the epoch dashboard.
//!
//! # Health
//!
//! - `GET /health` - Liveness probe (always returns 200 if server running)
//!
//! # Status
//!
//! - `GET /api/v1/status` - Uptime, version, snapshot source and the last
//!   successful pass
//!
//! # Epoch validators
//!
//! - `GET /api/v1/epoch-validators` - One pass, returned as JSON
//! - `GET /epoch-validators` - One pass, rendered as plain text
//!
//! Every request runs a fresh pass against the configured
//! [`SnapshotSource`](crate::SnapshotSource). Source failures return 502,
//! snapshots that cannot be assembled return 422, both with an
//! `{"error": ...}` body.
//!
//! # Example
//!
//! ```ignore
//! let source = Arc::new(FileSource::new("./epoch_info.json"));
//! let config = DashboardServerConfig {
//!     listen_addr: "127.0.0.1:3030".parse()?,
//! };
//! let handle = DashboardServer::new(config, source).start().await?;
//! handle.join().await?;
//! ```

mod handlers;
mod routes;
mod server;
mod state;
mod types;

pub use routes::create_router;
pub use server::{DashboardServer, DashboardServerConfig, DashboardServerHandle, ServerError};
pub use state::DashboardState;
pub use types::*;
