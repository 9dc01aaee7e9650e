//! Bars as ordered drawing parts.

use serde::{Deserialize, Serialize};

/// What a bar part depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    Pledge,
    Produced,
    Missed,
    /// Informational marker for a validator that was expected to produce nothing.
    ZeroExpected,
}

/// One drawable element of a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BarPart {
    /// Filled segment, `width` in abstract display units.
    Segment { kind: BarKind, width: f64 },
    /// Text drawn alongside the segments.
    Label { kind: BarKind, text: String },
}

/// Ordered parts of a bar, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    pub parts: Vec<BarPart>,
}

impl BarSpec {
    pub fn new(parts: Vec<BarPart>) -> Self {
        Self { parts }
    }

    /// Width of the first segment of the given kind.
    pub fn segment_width(&self, kind: BarKind) -> Option<f64> {
        self.parts.iter().find_map(|part| match part {
            BarPart::Segment { kind: k, width } if *k == kind => Some(*width),
            _ => None,
        })
    }

    /// Text of the first label of the given kind.
    pub fn label(&self, kind: BarKind) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            BarPart::Label { kind: k, text } if *k == kind => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_segment(&self, kind: BarKind) -> bool {
        self.segment_width(kind).is_some()
    }

    pub fn is_zero_expected(&self) -> bool {
        self.has_segment(BarKind::ZeroExpected)
    }

    /// Sum of all segment widths.
    pub fn total_width(&self) -> f64 {
        self.parts
            .iter()
            .map(|part| match part {
                BarPart::Segment { width, .. } => *width,
                BarPart::Label { .. } => 0.0,
            })
            .sum()
    }
}
