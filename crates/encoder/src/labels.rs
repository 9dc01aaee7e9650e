//! Short text tokens for roles and kickout reasons.

use epochview_types::{KickoutReason, ValidatorRole};
use serde::{Deserialize, Serialize};

/// Display token for a role: `BP`, `CP`, or empty.
pub fn role_label(role: ValidatorRole) -> &'static str {
    match role {
        ValidatorRole::BlockProducer => "BP",
        ValidatorRole::ChunkOnlyProducer => "CP",
        ValidatorRole::None => "",
    }
}

/// Short tag plus a sentence for the hover detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickoutSummary {
    pub short_label: String,
    pub detail: String,
}

impl KickoutSummary {
    fn new(short_label: &str, detail: impl Into<String>) -> Self {
        Self {
            short_label: short_label.to_string(),
            detail: detail.into(),
        }
    }
}

/// Summarize a kickout reason, `None` when the validator was not kicked out.
///
/// Unknown reasons are labeled `Other` and keep a compact JSON dump of the
/// raw reason as detail.
pub fn kickout_summary(reason: Option<&KickoutReason>) -> Option<KickoutSummary> {
    let summary = match reason? {
        KickoutReason::Slashed => KickoutSummary::new("Slashed", "Validator was slashed"),
        KickoutReason::Unpledged => KickoutSummary::new("Unpledged", "Validator unpledged"),
        KickoutReason::DidNotGetASeat => {
            KickoutSummary::new("Seat", "Validator did not get a seat")
        }
        KickoutReason::NotEnoughBlocks { expected, produced } => KickoutSummary::new(
            "#Blocks",
            format!(
                "Validator did not produce enough blocks: expected {expected}, actually produced {produced}"
            ),
        ),
        KickoutReason::NotEnoughChunks { expected, produced } => KickoutSummary::new(
            "#Chunks",
            format!(
                "Validator did not produce enough chunks: expected {expected}, actually produced {produced}"
            ),
        ),
        KickoutReason::NotEnoughPledge { threshold, pledge } => KickoutSummary::new(
            "LowPledge",
            format!(
                "Validator did not have enough pledge: minimum pledge required was {threshold}, but validator only had {pledge}"
            ),
        ),
        KickoutReason::Other(raw) => KickoutSummary::new("Other", raw.to_string()),
    };
    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(reason: KickoutReason) -> KickoutSummary {
        kickout_summary(Some(&reason)).unwrap()
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(role_label(ValidatorRole::BlockProducer), "BP");
        assert_eq!(role_label(ValidatorRole::ChunkOnlyProducer), "CP");
        assert_eq!(role_label(ValidatorRole::None), "");
    }

    #[test]
    fn test_no_reason_no_summary() {
        assert!(kickout_summary(None).is_none());
    }

    #[test]
    fn test_unit_reasons() {
        assert_eq!(
            summary(KickoutReason::Slashed),
            KickoutSummary::new("Slashed", "Validator was slashed")
        );
        assert_eq!(
            summary(KickoutReason::Unpledged),
            KickoutSummary::new("Unpledged", "Validator unpledged")
        );
        assert_eq!(
            summary(KickoutReason::DidNotGetASeat),
            KickoutSummary::new("Seat", "Validator did not get a seat")
        );
    }

    #[test]
    fn test_production_reasons() {
        let blocks = summary(KickoutReason::NotEnoughBlocks {
            expected: 100,
            produced: 12,
        });
        assert_eq!(blocks.short_label, "#Blocks");
        assert_eq!(
            blocks.detail,
            "Validator did not produce enough blocks: expected 100, actually produced 12"
        );

        let chunks = summary(KickoutReason::NotEnoughChunks {
            expected: 8,
            produced: 0,
        });
        assert_eq!(chunks.short_label, "#Chunks");
        assert_eq!(
            chunks.detail,
            "Validator did not produce enough chunks: expected 8, actually produced 0"
        );
    }

    #[test]
    fn test_low_pledge() {
        let low = summary(KickoutReason::NotEnoughPledge {
            threshold: 2_000_000_000_000_000_000_000_000_000,
            pledge: 15,
        });
        assert_eq!(low.short_label, "LowPledge");
        assert_eq!(
            low.detail,
            "Validator did not have enough pledge: minimum pledge required was \
             2000000000000000000000000000, but validator only had 15"
        );
    }

    #[test]
    fn test_unknown_reason_keeps_structure() {
        let other = summary(KickoutReason::Other(json!({
            "NotEnoughPower": { "power_u128": "1" }
        })));
        assert_eq!(other.short_label, "Other");
        assert_eq!(other.detail, r#"{"NotEnoughPower":{"power_u128":"1"}}"#);

        let bare = summary(KickoutReason::Other(json!("Unpowered")));
        assert_eq!(bare.detail, "\"Unpowered\"");
    }

    #[test]
    fn test_unknown_reason_keeps_wire_key_order() {
        let raw = r#"{"NotEnoughPower":{"power_u128":"1","power_threshold_u128":"2"}}"#;
        let reason = KickoutReason::from_value(serde_json::from_str(raw).unwrap());
        assert_eq!(summary(reason).detail, raw);
    }
}
