//! Response bodies.

use crate::pass::PassSummary;
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of `GET /api/v1/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatusResponse {
    pub uptime_secs: u64,
    pub version: String,
    /// Where snapshots are loaded from.
    pub source: String,
    /// `None` until a pass has succeeded.
    pub last_pass: Option<PassSummary>,
}

/// Body of every failed pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
