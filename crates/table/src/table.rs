//! The epoch validators table.

use crate::assemble::{populate, AssembleError, Population};
use crate::normalization::Normalization;
use epochview_encoder::{
    kickout_summary, pledge_bar, production_bar, role_label, BarSpec, KickoutSummary,
};
use epochview_registry::ValidatorRecord;
use epochview_types::{
    join_shards, AccountId, EpochInfoSnapshot, CURRENT_EPOCH_SLOT, FIRST_PAST_EPOCH_SLOT,
    NEXT_EPOCH_SLOT,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Column titles before the per-epoch history columns.
pub const FIXED_COLUMNS: [&str; 11] = [
    "Validator",
    "Role",
    "Shards",
    "Pledge",
    "Proposal",
    "Role",
    "Shards",
    "Pledge",
    "Blocks",
    "Chunks",
    "Kickout",
];

/// A header cell spanning `span` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderGroup {
    pub title: String,
    pub span: usize,
}

impl HeaderGroup {
    fn new(title: &str, span: usize) -> Self {
        Self {
            title: title.to_string(),
            span,
        }
    }
}

/// One validator's row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorRow {
    pub account_id: AccountId,
    pub next_role: String,
    pub next_shards: String,
    pub next_pledge: Option<BarSpec>,
    pub proposal: Option<BarSpec>,
    pub current_role: String,
    pub current_shards: String,
    pub current_pledge: Option<BarSpec>,
    pub blocks: Option<BarSpec>,
    pub chunks: Option<BarSpec>,
    pub kickout: Option<KickoutSummary>,
    /// Role tokens for past epochs, most recent first.
    pub past_roles: Vec<String>,
}

/// A borrowed cell, in column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Bar(Option<&'a BarSpec>),
    Kickout(Option<&'a KickoutSummary>),
}

impl ValidatorRow {
    fn from_record(record: &ValidatorRecord, scale: &Normalization) -> Self {
        let current = record.current.as_ref();
        let next = record.next.as_ref();

        Self {
            account_id: record.account_id.clone(),
            next_role: role_label(record.role(NEXT_EPOCH_SLOT)).to_string(),
            next_shards: next
                .map(|next| join_shards(&next.shards))
                .unwrap_or_default(),
            next_pledge: pledge_bar(
                next.map(|next| next.pledge),
                scale.max_pledge,
                scale.total_pledge,
            ),
            proposal: pledge_bar(record.proposal_pledge, scale.max_pledge, scale.total_pledge),
            current_role: role_label(record.role(CURRENT_EPOCH_SLOT)).to_string(),
            current_shards: current
                .map(|current| join_shards(&current.shards))
                .unwrap_or_default(),
            current_pledge: pledge_bar(
                current.map(|current| current.pledge),
                scale.max_pledge,
                scale.total_pledge,
            ),
            blocks: production_bar(
                current.map(|current| current.blocks),
                scale.max_expected_blocks,
            ),
            chunks: production_bar(
                current.map(|current| current.chunks),
                scale.max_expected_chunks,
            ),
            kickout: kickout_summary(record.kickout_reason.as_ref()),
            past_roles: (FIRST_PAST_EPOCH_SLOT..record.roles.len())
                .map(|slot| role_label(record.role(slot)).to_string())
                .collect(),
        }
    }

    /// Cells in the same order as [`EpochValidatorsTable::columns`].
    pub fn cells(&self) -> Vec<Cell<'_>> {
        let mut cells = vec![
            Cell::Text(self.account_id.as_str()),
            Cell::Text(&self.next_role),
            Cell::Text(&self.next_shards),
            Cell::Bar(self.next_pledge.as_ref()),
            Cell::Bar(self.proposal.as_ref()),
            Cell::Text(&self.current_role),
            Cell::Text(&self.current_shards),
            Cell::Bar(self.current_pledge.as_ref()),
            Cell::Bar(self.blocks.as_ref()),
            Cell::Bar(self.chunks.as_ref()),
            Cell::Kickout(self.kickout.as_ref()),
        ];
        cells.extend(self.past_roles.iter().map(|role| Cell::Text(role.as_str())));
        cells
    }
}

/// Display model for one epoch window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochValidatorsTable {
    /// Epochs in the window, including next and current.
    pub num_epochs: usize,
    pub header_groups: Vec<HeaderGroup>,
    pub columns: Vec<String>,
    pub rows: Vec<ValidatorRow>,
    pub normalization: Normalization,
}

impl EpochValidatorsTable {
    /// Run one full pass: populate a fresh registry, sort it, encode every
    /// row.
    #[instrument(level = "debug", skip_all)]
    pub fn assemble(snapshot: &EpochInfoSnapshot) -> Result<Self, AssembleError> {
        let Population {
            registry,
            normalization,
        } = populate(snapshot)?;

        let epochs = snapshot.epochs();
        let past_epochs = epochs.len().saturating_sub(FIRST_PAST_EPOCH_SLOT);

        let header_groups = vec![
            HeaderGroup::new("", 1),
            HeaderGroup::new("Next Epoch", 4),
            HeaderGroup::new("Current Epoch", 5),
            HeaderGroup::new("Past Epochs", 1 + past_epochs),
        ];
        let columns = FIXED_COLUMNS
            .iter()
            .map(|title| title.to_string())
            .chain(
                epochs
                    .iter()
                    .skip(FIRST_PAST_EPOCH_SLOT)
                    .map(|epoch| epoch.short_id()),
            )
            .collect();
        let rows: Vec<ValidatorRow> = registry
            .sorted_view()
            .into_iter()
            .map(|record| ValidatorRow::from_record(record, &normalization))
            .collect();

        debug!(rows = rows.len(), past_epochs, "Assembled epoch validators table");
        Ok(Self {
            num_epochs: epochs.len(),
            header_groups,
            columns,
            rows,
            normalization,
        })
    }

    pub fn row(&self, account_id: &str) -> Option<&ValidatorRow> {
        self.rows
            .iter()
            .find(|row| row.account_id.as_str() == account_id)
    }
}
