//! Produced-versus-expected bars for blocks and chunks.

use crate::bar::{BarKind, BarPart, BarSpec};
use crate::pledge::BAR_SCALE;
use epochview_types::ProductionCounts;

/// Width units added to every production bar.
pub const PRODUCTION_BAR_BASELINE: f64 = 10.0;

/// Narrowest a produced or missed segment is drawn when there is a miss.
pub const MIN_SEGMENT_WIDTH: f64 = 5.0;

/// Encode produced/expected counts as a two-segment bar.
///
/// The full bar is `expected / max_expected * 100 + 10` units wide and is
/// split between produced and missed in proportion to the counts. When
/// anything was missed, each segment is held to at least
/// [`MIN_SEGMENT_WIDTH`]: first the produced segment is widened (taking
/// from missed), then the missed segment (taking from produced). The second
/// step sees the result of the first.
///
/// A validator expected to produce nothing gets a zero-width
/// [`BarKind::ZeroExpected`] marker labeled `0` instead.
pub fn production_bar(counts: Option<ProductionCounts>, max_expected: f64) -> Option<BarSpec> {
    let counts = counts?;
    let ProductionCounts { produced, expected } = counts;
    if expected == 0 {
        return Some(zero_expected());
    }

    let expected_f = expected as f64;
    let produced_f = produced as f64;
    let expected_width = expected_f / max_expected * BAR_SCALE + PRODUCTION_BAR_BASELINE;
    let mut produced_width = expected_width * produced_f / expected_f;
    let mut missed_width = expected_width * (expected_f - produced_f) / expected_f;

    let complete = counts.is_complete();
    if !complete {
        if produced_width < MIN_SEGMENT_WIDTH {
            produced_width = MIN_SEGMENT_WIDTH;
            missed_width = expected_width - produced_width;
        }
        if missed_width < MIN_SEGMENT_WIDTH {
            missed_width = MIN_SEGMENT_WIDTH;
            produced_width = expected_width - missed_width;
        }
    }

    let mut parts = vec![
        BarPart::Label {
            kind: BarKind::Produced,
            text: produced.to_string(),
        },
        BarPart::Segment {
            kind: BarKind::Produced,
            width: produced_width,
        },
    ];
    if !complete {
        let missed = i128::from(expected) - i128::from(produced);
        parts.push(BarPart::Segment {
            kind: BarKind::Missed,
            width: missed_width,
        });
        parts.push(BarPart::Label {
            kind: BarKind::Missed,
            text: missed.to_string(),
        });
    }
    Some(BarSpec::new(parts))
}

fn zero_expected() -> BarSpec {
    BarSpec::new(vec![
        BarPart::Segment {
            kind: BarKind::ZeroExpected,
            width: 0.0,
        },
        BarPart::Label {
            kind: BarKind::ZeroExpected,
            text: "0".to_string(),
        },
    ])
}
