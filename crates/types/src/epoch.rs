//! Epoch-info snapshot payload.
//!
//! These types mirror the JSON a node's debug endpoint returns for its
//! epoch window. They are deserialized as-is and never validated here; the
//! assembly layer decides what is malformed.
//!
//! ```text
//! status_response.EpochInfo[0]   next epoch
//! status_response.EpochInfo[1]   current epoch (carries validator_info)
//! status_response.EpochInfo[2..] past epochs, oldest last
//! ```

use crate::{AccountId, KickoutReason, ProductionCounts, ShardId};
use serde::{Deserialize, Serialize};

/// Index of the next epoch in the window.
pub const NEXT_EPOCH_SLOT: usize = 0;
/// Index of the current epoch in the window.
pub const CURRENT_EPOCH_SLOT: usize = 1;
/// Index of the most recent past epoch in the window.
pub const FIRST_PAST_EPOCH_SLOT: usize = 2;

/// Top-level payload returned by the epoch-info debug endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochInfoSnapshot {
    pub status_response: StatusResponse,
}

impl EpochInfoSnapshot {
    pub fn new(epochs: Vec<EpochDescriptor>) -> Self {
        Self {
            status_response: StatusResponse { epoch_info: epochs },
        }
    }

    /// All epochs in the window, next epoch first.
    pub fn epochs(&self) -> &[EpochDescriptor] {
        &self.status_response.epoch_info
    }

    /// Validator lists of the current epoch, if the window has one.
    pub fn current_validator_info(&self) -> Option<&EpochValidatorInfo> {
        self.epochs()
            .get(CURRENT_EPOCH_SLOT)
            .and_then(|epoch| epoch.validator_info.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "EpochInfo")]
    pub epoch_info: Vec<EpochDescriptor>,
}

/// One epoch of the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochDescriptor {
    pub epoch_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default)]
    pub block_producers: Vec<BlockProducerView>,
    #[serde(default)]
    pub chunk_only_producers: Vec<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator_info: Option<EpochValidatorInfo>,
}

impl EpochDescriptor {
    /// Short column title: first four characters of the id followed by `...`.
    pub fn short_id(&self) -> String {
        let prefix: String = self.epoch_id.chars().take(4).collect();
        format!("{prefix}...")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockProducerView {
    pub account_id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pledge: Option<String>,
}

/// The four validator lists attached to the current epoch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EpochValidatorInfo {
    #[serde(default)]
    pub current_validators: Vec<CurrentValidatorView>,
    #[serde(default)]
    pub next_validators: Vec<NextValidatorView>,
    #[serde(default)]
    pub current_proposals: Vec<ProposalView>,
    #[serde(default)]
    pub prev_epoch_kickout: Vec<KickoutView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentValidatorView {
    pub account_id: AccountId,
    /// Decimal-formatted pledge.
    pub pledge: String,
    #[serde(default)]
    pub shards: Vec<ShardId>,
    #[serde(default)]
    pub num_produced_blocks: u64,
    #[serde(default)]
    pub num_expected_blocks: u64,
    #[serde(default)]
    pub num_produced_chunks: u64,
    #[serde(default)]
    pub num_expected_chunks: u64,
}

impl CurrentValidatorView {
    pub fn blocks(&self) -> ProductionCounts {
        ProductionCounts::new(self.num_produced_blocks, self.num_expected_blocks)
    }

    pub fn chunks(&self) -> ProductionCounts {
        ProductionCounts::new(self.num_produced_chunks, self.num_expected_chunks)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextValidatorView {
    pub account_id: AccountId,
    pub pledge: String,
    #[serde(default)]
    pub shards: Vec<ShardId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalView {
    pub account_id: AccountId,
    pub pledge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KickoutView {
    pub account_id: AccountId,
    pub reason: KickoutReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "status_response": {
            "EpochInfo": [
                {
                    "epoch_id": "9xQvNext",
                    "height": 300,
                    "block_producers": [{"account_id": "alice", "pledge": "100"}],
                    "chunk_only_producers": ["bob"]
                },
                {
                    "epoch_id": "4kTrCurrent",
                    "block_producers": [{"account_id": "alice"}],
                    "chunk_only_producers": [],
                    "validator_info": {
                        "current_validators": [{
                            "account_id": "alice",
                            "pledge": "100",
                            "shards": [0, 1],
                            "num_produced_blocks": 9,
                            "num_expected_blocks": 10,
                            "num_produced_chunks": 20,
                            "num_expected_chunks": 20
                        }],
                        "next_validators": [{"account_id": "alice", "pledge": "110", "shards": [1]}],
                        "current_proposals": [{"account_id": "carol", "pledge": "5"}],
                        "prev_epoch_kickout": [{"account_id": "dave", "reason": "Slashed"}]
                    }
                },
                {
                    "epoch_id": "Zz",
                    "block_producers": []
                }
            ]
        }
    }"#;

    #[test]
    fn test_decode_payload() {
        let snapshot: EpochInfoSnapshot = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(snapshot.epochs().len(), 3);

        let next = &snapshot.epochs()[NEXT_EPOCH_SLOT];
        assert_eq!(next.height, Some(300));
        assert_eq!(next.chunk_only_producers, vec![AccountId::from("bob")]);
        assert!(next.validator_info.is_none());

        let info = snapshot.current_validator_info().unwrap();
        let alice = &info.current_validators[0];
        assert_eq!(alice.shards, vec![ShardId(0), ShardId(1)]);
        assert_eq!(alice.blocks(), ProductionCounts::new(9, 10));
        assert!(alice.chunks().is_complete());
        assert_eq!(info.prev_epoch_kickout[0].reason, KickoutReason::Slashed);

        let past = &snapshot.epochs()[FIRST_PAST_EPOCH_SLOT];
        assert!(past.chunk_only_producers.is_empty());
    }

    #[test]
    fn test_missing_current_epoch() {
        let snapshot = EpochInfoSnapshot::new(vec![EpochDescriptor {
            epoch_id: "only".into(),
            height: None,
            block_producers: vec![],
            chunk_only_producers: vec![],
            validator_info: None,
        }]);
        assert!(snapshot.current_validator_info().is_none());
    }

    #[test]
    fn test_short_id() {
        let epoch = EpochDescriptor {
            epoch_id: "AbCdEfGh".into(),
            height: None,
            block_producers: vec![],
            chunk_only_producers: vec![],
            validator_info: None,
        };
        assert_eq!(epoch.short_id(), "AbCd...");

        let epoch = EpochDescriptor {
            epoch_id: "ab".into(),
            ..epoch
        };
        assert_eq!(epoch.short_id(), "ab...");
    }
}
