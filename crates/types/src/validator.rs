//! Validator facts shared by the registry and the encoder.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

/// On-chain token amount, in the smallest denomination.
pub type Balance = u128;

/// Role an account holds in one epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValidatorRole {
    BlockProducer,
    ChunkOnlyProducer,
    #[default]
    None,
}

/// Produced versus expected count of blocks or chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductionCounts {
    pub produced: u64,
    pub expected: u64,
}

impl ProductionCounts {
    pub fn new(produced: u64, expected: u64) -> Self {
        Self { produced, expected }
    }

    /// Whether every expected item was produced.
    pub fn is_complete(&self) -> bool {
        self.produced == self.expected
    }
}

/// Reason a validator was removed from the set at the last epoch boundary.
///
/// Decoding never fails: any shape that is not one of the known variants is
/// kept verbatim in [`KickoutReason::Other`] so it can still be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum KickoutReason {
    Slashed,
    Unpledged,
    DidNotGetASeat,
    NotEnoughBlocks { expected: u64, produced: u64 },
    NotEnoughChunks { expected: u64, produced: u64 },
    NotEnoughPledge { threshold: Balance, pledge: Balance },
    Other(Value),
}

impl KickoutReason {
    /// Decode from the externally tagged JSON form used by the node.
    pub fn from_value(value: Value) -> Self {
        match &value {
            Value::String(tag) => match tag.as_str() {
                "Slashed" => return Self::Slashed,
                "Unpledged" => return Self::Unpledged,
                "DidNotGetASeat" => return Self::DidNotGetASeat,
                _ => {}
            },
            Value::Object(map) if map.len() == 1 => {
                if let Some(reason) = map.iter().next().and_then(|(tag, body)| {
                    let body = body.as_object()?;
                    match tag.as_str() {
                        "NotEnoughBlocks" => {
                            let (expected, produced) = production(body)?;
                            Some(Self::NotEnoughBlocks { expected, produced })
                        }
                        "NotEnoughChunks" => {
                            let (expected, produced) = production(body)?;
                            Some(Self::NotEnoughChunks { expected, produced })
                        }
                        "NotEnoughPledge" => Some(Self::NotEnoughPledge {
                            threshold: amount(body, &["threshold", "pledge_threshold_u128"])?,
                            pledge: amount(body, &["pledge", "pledge_u128"])?,
                        }),
                        _ => None,
                    }
                }) {
                    return reason;
                }
            }
            _ => {}
        }
        Self::Other(value)
    }

    /// Encode back into the externally tagged JSON form.
    ///
    /// Pledge amounts are written as decimal strings since they can exceed
    /// the range JSON numbers round-trip safely.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Slashed => Value::from("Slashed"),
            Self::Unpledged => Value::from("Unpledged"),
            Self::DidNotGetASeat => Value::from("DidNotGetASeat"),
            Self::NotEnoughBlocks { expected, produced } => {
                json!({ "NotEnoughBlocks": { "expected": expected, "produced": produced } })
            }
            Self::NotEnoughChunks { expected, produced } => {
                json!({ "NotEnoughChunks": { "expected": expected, "produced": produced } })
            }
            Self::NotEnoughPledge { threshold, pledge } => json!({
                "NotEnoughPledge": {
                    "threshold": threshold.to_string(),
                    "pledge": pledge.to_string(),
                }
            }),
            Self::Other(value) => value.clone(),
        }
    }
}

fn production(body: &Map<String, Value>) -> Option<(u64, u64)> {
    let expected = body.get("expected")?.as_u64()?;
    let produced = body.get("produced")?.as_u64()?;
    Some((expected, produced))
}

fn amount(body: &Map<String, Value>, keys: &[&str]) -> Option<Balance> {
    keys.iter()
        .find_map(|key| body.get(*key))
        .and_then(|value| match value {
            Value::String(digits) => digits.parse().ok(),
            Value::Number(number) => number.as_u64().map(Balance::from),
            _ => None,
        })
}

impl Serialize for KickoutReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KickoutReason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Parse a decimal pledge string into a float for display.
///
/// Precision loss is accepted here. Returns `None` for anything that is not
/// a finite, non-negative number.
pub fn parse_pledge(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|pledge| pledge.is_finite() && *pledge >= 0.0)
}
