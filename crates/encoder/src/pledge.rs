//! Pledge bars.

use crate::bar::{BarKind, BarPart, BarSpec};

/// Width units added to every pledge bar so a tiny pledge stays visible.
pub const PLEDGE_BAR_BASELINE: f64 = 5.0;

/// Width units spanned by the largest pledge, before the baseline.
pub const BAR_SCALE: f64 = 100.0;

/// Pledges are shown in whole tokens of this many base units.
pub const PLEDGE_DISPLAY_UNIT: f64 = 1e24;

/// Encode a pledge as a bar scaled against the largest current pledge.
///
/// Returns `None` only when there is no pledge; a zero pledge still yields a
/// baseline-width bar. `max_pledge` and `total_pledge` must be positive.
///
/// The label is the pledge in whole tokens, thousands-grouped, followed by
/// its share of `total_pledge`, e.g. `1,234 (12.34%)`.
pub fn pledge_bar(pledge: Option<f64>, max_pledge: f64, total_pledge: f64) -> Option<BarSpec> {
    let pledge = pledge?;
    let width = pledge / max_pledge * BAR_SCALE + PLEDGE_BAR_BASELINE;
    let tokens = group_thousands((pledge / PLEDGE_DISPLAY_UNIT).floor() as u128);
    let share = round_half_up_2(100.0 * pledge / total_pledge);

    Some(BarSpec::new(vec![
        BarPart::Segment {
            kind: BarKind::Pledge,
            width,
        },
        BarPart::Label {
            kind: BarKind::Pledge,
            text: format!("{tokens} ({share:.2}%)"),
        },
    ]))
}

/// Round to two decimal places with ties going up; `{:.2}` alone rounds
/// exact ties to even.
fn round_half_up_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
