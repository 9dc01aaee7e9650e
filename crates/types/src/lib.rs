//! Core types for the epoch validator dashboard.
//!
//! This crate provides the foundational types shared by every other crate in
//! the workspace:
//!
//! - **Identifiers**: `AccountId`, `ShardId`
//! - **Validator facts**: `ValidatorRole`, `ProductionCounts`, `KickoutReason`
//! - **Snapshot payload**: `EpochInfoSnapshot` and the per-epoch views it
//!   carries, exactly as a node's debug endpoint serves them
//!
//! # Design Philosophy
//!
//! This crate is self-contained with minimal dependencies. It does not depend on
//! any other workspace crates, making it the foundation layer.

mod epoch;
mod identifiers;
mod validator;

pub use epoch::{
    BlockProducerView, CurrentValidatorView, EpochDescriptor, EpochInfoSnapshot,
    EpochValidatorInfo, KickoutView, NextValidatorView, ProposalView, StatusResponse,
    CURRENT_EPOCH_SLOT, FIRST_PAST_EPOCH_SLOT, NEXT_EPOCH_SLOT,
};
pub use identifiers::{join_shards, AccountId, ShardId};
pub use validator::{parse_pledge, Balance, KickoutReason, ProductionCounts, ValidatorRole};
