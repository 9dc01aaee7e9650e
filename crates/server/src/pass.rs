//! One load-and-assemble pass.

use crate::source::{SnapshotSource, SourceError};
use epochview_table::{AssembleError, EpochValidatorsTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Why a pass produced no table.
#[derive(Debug, Error)]
pub enum PassError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("malformed snapshot: {0}")]
    Assemble(#[from] AssembleError),
}

/// Counts from the last successful pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    pub epochs: usize,
    pub validators: usize,
}

impl PassSummary {
    pub fn of(table: &EpochValidatorsTable) -> Self {
        Self {
            epochs: table.num_epochs,
            validators: table.rows.len(),
        }
    }
}

/// Load a snapshot and build its table. Blocking; the server calls it from
/// `spawn_blocking`.
#[instrument(level = "debug", skip_all, fields(source = %source.describe()))]
pub fn run_pass(source: &dyn SnapshotSource) -> Result<EpochValidatorsTable, PassError> {
    let snapshot = source.load()?;
    let table = EpochValidatorsTable::assemble(&snapshot)?;
    debug!(rows = table.rows.len(), "Pass complete");
    Ok(table)
}
