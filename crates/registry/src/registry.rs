//! Discover-or-create registry of validator records.

use crate::record::{CurrentEpochInfo, NextEpochInfo, ValidatorRecord};
use epochview_types::{AccountId, KickoutReason, ValidatorRole};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

/// Errors from registry mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("epoch slot {slot} out of range for {account_id}: window has {num_epochs} epochs")]
    EpochSlotOutOfRange {
        account_id: AccountId,
        slot: usize,
        num_epochs: usize,
    },
}

/// Merges validator facts from independent source lists into one record per
/// account.
///
/// Records are created on first reference from any source and are never
/// removed. Insertion order is remembered and used to break sort ties, so a
/// registry fed the same lists in the same order always yields the same view.
#[derive(Debug, Clone)]
pub struct ValidatorRegistry {
    num_epochs: usize,
    index: HashMap<AccountId, usize>,
    records: Vec<ValidatorRecord>,
}

impl ValidatorRegistry {
    /// Create an empty registry for a window of `num_epochs` epochs.
    pub fn new(num_epochs: usize) -> Self {
        Self {
            num_epochs,
            index: HashMap::new(),
            records: Vec::new(),
        }
    }

    /// Number of epochs in the window; every record has this many role slots.
    pub fn num_epochs(&self) -> usize {
        self.num_epochs
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record without creating it.
    pub fn get(&self, account_id: &str) -> Option<&ValidatorRecord> {
        self.index.get(account_id).map(|&idx| &self.records[idx])
    }

    /// Return the record for `account_id`, creating an empty one on first use.
    pub fn record_or_create(&mut self, account_id: &AccountId) -> &mut ValidatorRecord {
        let idx = match self.index.get(account_id.as_str()) {
            Some(&idx) => idx,
            None => {
                let idx = self.records.len();
                trace!(account_id = %account_id, idx, "New validator record");
                self.records
                    .push(ValidatorRecord::new(account_id.clone(), self.num_epochs));
                self.index.insert(account_id.clone(), idx);
                idx
            }
        };
        &mut self.records[idx]
    }

    pub fn set_current(&mut self, account_id: &AccountId, current: CurrentEpochInfo) {
        self.record_or_create(account_id).current = Some(current);
    }

    pub fn set_next(&mut self, account_id: &AccountId, next: NextEpochInfo) {
        self.record_or_create(account_id).next = Some(next);
    }

    pub fn set_proposal_pledge(&mut self, account_id: &AccountId, pledge: f64) {
        self.record_or_create(account_id).proposal_pledge = Some(pledge);
    }

    pub fn set_kickout_reason(&mut self, account_id: &AccountId, reason: KickoutReason) {
        self.record_or_create(account_id).kickout_reason = Some(reason);
    }

    /// Write `role` into the account's role slot for `epoch_slot`.
    ///
    /// The slot is checked before the record is touched, so a failed call
    /// leaves the registry unchanged.
    pub fn set_role(
        &mut self,
        account_id: &AccountId,
        epoch_slot: usize,
        role: ValidatorRole,
    ) -> Result<(), RegistryError> {
        if epoch_slot >= self.num_epochs {
            return Err(RegistryError::EpochSlotOutOfRange {
                account_id: account_id.clone(),
                slot: epoch_slot,
                num_epochs: self.num_epochs,
            });
        }
        self.record_or_create(account_id).roles[epoch_slot] = role;
        Ok(())
    }

    /// All records in display order.
    ///
    /// Accounts with a current-epoch entry come first, then next-epoch only,
    /// then proposal only, then everything else. Within a tier the larger
    /// pledge sorts first; ties keep first-seen order.
    pub fn sorted_view(&self) -> Vec<&ValidatorRecord> {
        let mut view: Vec<&ValidatorRecord> = self.records.iter().collect();
        view.sort_by(|a, b| display_order(a, b));
        view
    }

    /// Consuming variant of [`sorted_view`](Self::sorted_view).
    pub fn into_sorted(self) -> Vec<ValidatorRecord> {
        let mut records = self.records;
        records.sort_by(display_order);
        records
    }
}

fn display_order(a: &ValidatorRecord, b: &ValidatorRecord) -> Ordering {
    let (a_tier, a_value) = a.sort_key();
    let (b_tier, b_value) = b.sort_key();
    a_tier.cmp(&b_tier).then_with(|| b_value.partial_cmp(&a_value).unwrap_or(Ordering::Equal))
}
