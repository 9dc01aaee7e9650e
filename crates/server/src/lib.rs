//! Serving layer for the epoch validator dashboard.
//!
//! Wraps the table pass in the pieces a deployment needs: TOML
//! [`config`], subscriber setup in [`logging`], pluggable snapshot
//! [`source`]s, and the axum [`rpc`] server. The `epochview-server` and
//! `epochview-render` binaries are thin shells over these.

pub mod config;
pub mod logging;
pub mod pass;
pub mod rpc;
pub mod source;

pub use config::{ConfigOverrides, DashboardConfig, LoggingConfig};
pub use pass::{run_pass, PassError, PassSummary};
pub use rpc::{DashboardServer, DashboardServerConfig, DashboardServerHandle, ServerError};
pub use source::{parse_snapshot, FileSource, SnapshotSource, SourceError, StaticSource};
