//! Cross-validator maxima used to scale bars.

use epochview_registry::CurrentEpochInfo;
use serde::Serialize;

/// Scale shared by every bar in one table.
///
/// `max_pledge` and `total_pledge` are always positive so the encoder never
/// divides by zero. The expected maxima may be zero, in which case every
/// count has `expected == 0` and takes the zero-expected path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normalization {
    pub max_pledge: f64,
    pub total_pledge: f64,
    pub max_expected_blocks: f64,
    pub max_expected_chunks: f64,
}

impl Normalization {
    /// One pass over the current-epoch validators.
    ///
    /// Pledge maxima may come out as zero here; see
    /// [`with_fallback_pledges`](Self::with_fallback_pledges).
    pub fn scan<'a>(current: impl IntoIterator<Item = &'a CurrentEpochInfo>) -> Self {
        let mut scale = Self {
            max_pledge: 0.0,
            total_pledge: 0.0,
            max_expected_blocks: 0.0,
            max_expected_chunks: 0.0,
        };
        for info in current {
            scale.max_pledge = scale.max_pledge.max(info.pledge);
            scale.total_pledge += info.pledge;
            scale.max_expected_blocks = scale.max_expected_blocks.max(info.blocks.expected as f64);
            scale.max_expected_chunks = scale.max_expected_chunks.max(info.chunks.expected as f64);
        }
        scale
    }

    /// Make the pledge maxima positive.
    ///
    /// If the current epoch carried no positive pledge, the maxima are taken
    /// from `others` (next-epoch and proposal pledges). If those are all zero
    /// too, both become `1.0`, which renders every pledge as a baseline bar
    /// at 0.00%.
    pub fn with_fallback_pledges(mut self, others: impl IntoIterator<Item = f64>) -> Self {
        if self.max_pledge > 0.0 && self.total_pledge > 0.0 {
            return self;
        }
        let (max, total) = others
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(max, total), pledge| {
                (max.max(pledge), total + pledge)
            });
        self.max_pledge = if max > 0.0 { max } else { 1.0 };
        self.total_pledge = if total > 0.0 { total } else { 1.0 };
        self
    }
}
