//! Populate a registry from a snapshot.

use crate::normalization::Normalization;
use epochview_registry::{CurrentEpochInfo, NextEpochInfo, RegistryError, ValidatorRegistry};
use epochview_types::{
    parse_pledge, AccountId, EpochInfoSnapshot, ValidatorRole, CURRENT_EPOCH_SLOT,
};
use thiserror::Error;
use tracing::{debug, instrument};

/// Reasons a snapshot cannot be turned into a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssembleError {
    #[error("snapshot has no current epoch validator info ({epochs} epochs in window)")]
    MissingCurrentEpoch { epochs: usize },

    #[error("invalid pledge {value:?} for {account_id}")]
    InvalidPledge { account_id: AccountId, value: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// A populated registry plus the scale its bars are drawn with.
#[derive(Debug, Clone)]
pub struct Population {
    pub registry: ValidatorRegistry,
    pub normalization: Normalization,
}

/// Feed every source list of `snapshot` into a fresh registry.
///
/// Lists are merged in a fixed order: current validators, next validators,
/// proposals, kickouts, then the role timeline epoch by epoch with
/// chunk-only producers before block producers. That order defines
/// first-seen order and therefore the tie order of the sorted view. An
/// account listed as both kinds of producer in one epoch ends up as a block
/// producer.
#[instrument(level = "debug", skip_all, fields(epochs = snapshot.epochs().len()))]
pub fn populate(snapshot: &EpochInfoSnapshot) -> Result<Population, AssembleError> {
    let epochs = snapshot.epochs();
    let info = snapshot
        .current_validator_info()
        .ok_or(AssembleError::MissingCurrentEpoch {
            epochs: epochs.len(),
        })?;

    let current = info
        .current_validators
        .iter()
        .map(|view| {
            let pledge = pledge(&view.account_id, &view.pledge)?;
            Ok((
                &view.account_id,
                CurrentEpochInfo {
                    pledge,
                    shards: view.shards.clone(),
                    blocks: view.blocks(),
                    chunks: view.chunks(),
                },
            ))
        })
        .collect::<Result<Vec<_>, AssembleError>>()?;
    let next = info
        .next_validators
        .iter()
        .map(|view| {
            let pledge = pledge(&view.account_id, &view.pledge)?;
            Ok((
                &view.account_id,
                NextEpochInfo {
                    pledge,
                    shards: view.shards.clone(),
                },
            ))
        })
        .collect::<Result<Vec<_>, AssembleError>>()?;
    let proposals = info
        .current_proposals
        .iter()
        .map(|view| Ok((&view.account_id, pledge(&view.account_id, &view.pledge)?)))
        .collect::<Result<Vec<_>, AssembleError>>()?;

    let normalization = Normalization::scan(current.iter().map(|(_, info)| info))
        .with_fallback_pledges(
            next.iter()
                .map(|(_, info)| info.pledge)
                .chain(proposals.iter().map(|(_, pledge)| *pledge)),
        );

    let mut registry = ValidatorRegistry::new(epochs.len());
    for (account_id, info) in current {
        registry.set_current(account_id, info);
    }
    for (account_id, info) in next {
        registry.set_next(account_id, info);
    }
    for (account_id, pledge) in proposals {
        registry.set_proposal_pledge(account_id, pledge);
    }
    for kickout in &info.prev_epoch_kickout {
        registry.set_kickout_reason(&kickout.account_id, kickout.reason.clone());
    }
    for (slot, epoch) in epochs.iter().enumerate() {
        for account_id in &epoch.chunk_only_producers {
            registry.set_role(account_id, slot, ValidatorRole::ChunkOnlyProducer)?;
        }
        for producer in &epoch.block_producers {
            registry.set_role(&producer.account_id, slot, ValidatorRole::BlockProducer)?;
        }
    }

    debug!(
        validators = registry.len(),
        current_epoch = %epochs[CURRENT_EPOCH_SLOT].epoch_id,
        max_pledge = normalization.max_pledge,
        "Populated validator registry"
    );
    Ok(Population {
        registry,
        normalization,
    })
}

fn pledge(account_id: &AccountId, raw: &str) -> Result<f64, AssembleError> {
    parse_pledge(raw).ok_or_else(|| AssembleError::InvalidPledge {
        account_id: account_id.clone(),
        value: raw.to_string(),
    })
}
