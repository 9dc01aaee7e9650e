//! Test helpers for epochview - builds epoch-info snapshots for tests.
//!
//! Real snapshots come from a node's debug endpoint; tests need small,
//! deterministic ones where each validator shows up in exactly the lists the
//! test cares about.
//!
//! # Example
//!
//! ```rust
//! use epochview_test_helpers::{tokens, SnapshotBuilder};
//! use epochview_types::KickoutReason;
//!
//! let snapshot = SnapshotBuilder::new(4)
//!     .current_validator("alice", tokens(300), &[0], (9, 10), (20, 20))
//!     .next_validator("alice", tokens(310), &[1])
//!     .proposal("bob", tokens(5))
//!     .kickout("carol", KickoutReason::Slashed)
//!     .block_producer(1, "alice")
//!     .chunk_only_producer(3, "dave")
//!     .build();
//!
//! assert_eq!(snapshot.epochs().len(), 4);
//! ```

pub mod fixtures;

use epochview_types::{
    AccountId, Balance, BlockProducerView, CurrentValidatorView, EpochDescriptor,
    EpochInfoSnapshot, EpochValidatorInfo, KickoutReason, KickoutView, NextValidatorView,
    ProposalView, ShardId, CURRENT_EPOCH_SLOT,
};

/// Base units per whole token.
pub const TOKEN: Balance = 1_000_000_000_000_000_000_000_000;

/// `whole` tokens in base units.
pub fn tokens(whole: u64) -> Balance {
    Balance::from(whole) * TOKEN
}

/// Builder for an epoch window.
///
/// Epoch ids default to `epoch-<slot>`. The current epoch (slot 1) always
/// carries an empty `validator_info` that the list methods fill in.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    epochs: Vec<EpochDescriptor>,
}

impl SnapshotBuilder {
    /// Create a window of `num_epochs` empty epochs.
    pub fn new(num_epochs: usize) -> Self {
        let epochs = (0..num_epochs)
            .map(|slot| EpochDescriptor {
                epoch_id: format!("epoch-{slot}"),
                height: None,
                block_producers: Vec::new(),
                chunk_only_producers: Vec::new(),
                validator_info: (slot == CURRENT_EPOCH_SLOT)
                    .then(EpochValidatorInfo::default),
            })
            .collect();
        Self { epochs }
    }

    pub fn epoch_id(mut self, slot: usize, epoch_id: &str) -> Self {
        self.epochs[slot].epoch_id = epoch_id.to_string();
        self
    }

    /// Drop the current epoch's validator lists entirely.
    pub fn without_validator_info(mut self) -> Self {
        for epoch in &mut self.epochs {
            epoch.validator_info = None;
        }
        self
    }

    /// Add a current-epoch validator. `blocks` and `chunks` are
    /// `(produced, expected)`.
    pub fn current_validator(
        mut self,
        account_id: &str,
        pledge: Balance,
        shards: &[u64],
        blocks: (u64, u64),
        chunks: (u64, u64),
    ) -> Self {
        self.info_mut().current_validators.push(CurrentValidatorView {
            account_id: AccountId::from(account_id),
            pledge: pledge.to_string(),
            shards: to_shards(shards),
            num_produced_blocks: blocks.0,
            num_expected_blocks: blocks.1,
            num_produced_chunks: chunks.0,
            num_expected_chunks: chunks.1,
        });
        self
    }

    /// Add a current-epoch validator with a raw pledge string.
    pub fn current_validator_raw(mut self, account_id: &str, pledge: &str) -> Self {
        self.info_mut().current_validators.push(CurrentValidatorView {
            account_id: AccountId::from(account_id),
            pledge: pledge.to_string(),
            shards: Vec::new(),
            num_produced_blocks: 0,
            num_expected_blocks: 0,
            num_produced_chunks: 0,
            num_expected_chunks: 0,
        });
        self
    }

    pub fn next_validator(mut self, account_id: &str, pledge: Balance, shards: &[u64]) -> Self {
        self.info_mut().next_validators.push(NextValidatorView {
            account_id: AccountId::from(account_id),
            pledge: pledge.to_string(),
            shards: to_shards(shards),
        });
        self
    }

    pub fn proposal(mut self, account_id: &str, pledge: Balance) -> Self {
        self.info_mut().current_proposals.push(ProposalView {
            account_id: AccountId::from(account_id),
            pledge: pledge.to_string(),
        });
        self
    }

    pub fn kickout(mut self, account_id: &str, reason: KickoutReason) -> Self {
        self.info_mut().prev_epoch_kickout.push(KickoutView {
            account_id: AccountId::from(account_id),
            reason,
        });
        self
    }

    pub fn block_producer(mut self, slot: usize, account_id: &str) -> Self {
        self.epochs[slot].block_producers.push(BlockProducerView {
            account_id: AccountId::from(account_id),
            pledge: None,
        });
        self
    }

    pub fn chunk_only_producer(mut self, slot: usize, account_id: &str) -> Self {
        self.epochs[slot]
            .chunk_only_producers
            .push(AccountId::from(account_id));
        self
    }

    pub fn build(self) -> EpochInfoSnapshot {
        EpochInfoSnapshot::new(self.epochs)
    }

    /// Build and encode as the JSON a node would serve.
    pub fn build_json(self) -> String {
        serde_json::to_string_pretty(&self.build()).expect("snapshot serializes")
    }

    /// # Panics
    ///
    /// Panics if the window has no current epoch or its lists were dropped.
    fn info_mut(&mut self) -> &mut EpochValidatorInfo {
        self.epochs
            .get_mut(CURRENT_EPOCH_SLOT)
            .and_then(|epoch| epoch.validator_info.as_mut())
            .expect("window needs a current epoch with validator_info")
    }
}

fn to_shards(shards: &[u64]) -> Vec<ShardId> {
    shards.iter().copied().map(ShardId).collect()
}
