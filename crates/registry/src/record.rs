//! Per-account validator record.

use epochview_types::{AccountId, KickoutReason, ProductionCounts, ShardId, ValidatorRole};
use serde::Serialize;

/// Facts about an account that is an active validator in the current epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentEpochInfo {
    pub pledge: f64,
    pub shards: Vec<ShardId>,
    pub blocks: ProductionCounts,
    pub chunks: ProductionCounts,
}

/// Facts about an account assigned for the upcoming epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextEpochInfo {
    pub pledge: f64,
    pub shards: Vec<ShardId>,
}

/// Everything known about one account across the epoch window.
///
/// The four optional facts are independent; any combination is valid,
/// including none at all for an account seen only in a role timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorRecord {
    pub account_id: AccountId,
    pub current: Option<CurrentEpochInfo>,
    pub next: Option<NextEpochInfo>,
    pub proposal_pledge: Option<f64>,
    pub kickout_reason: Option<KickoutReason>,
    /// One role per epoch: slot 0 is next, slot 1 is current, then older.
    pub roles: Vec<ValidatorRole>,
}

impl ValidatorRecord {
    pub(crate) fn new(account_id: AccountId, num_epochs: usize) -> Self {
        Self {
            account_id,
            current: None,
            next: None,
            proposal_pledge: None,
            kickout_reason: None,
            roles: vec![ValidatorRole::None; num_epochs],
        }
    }

    /// Role held in the given epoch slot, `None` role when out of range.
    pub fn role(&self, epoch_slot: usize) -> ValidatorRole {
        self.roles
            .get(epoch_slot)
            .copied()
            .unwrap_or(ValidatorRole::None)
    }

    /// Sort tier and tie value; lower tier sorts first, then larger value.
    pub(crate) fn sort_key(&self) -> (u8, f64) {
        if let Some(current) = &self.current {
            return (0, current.pledge);
        }
        if let Some(next) = &self.next {
            return (1, next.pledge);
        }
        if let Some(pledge) = self.proposal_pledge {
            return (2, pledge);
        }
        (3, 0.0)
    }
}
