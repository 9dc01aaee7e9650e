//! Shared state for handlers.

use crate::pass::PassSummary;
use crate::source::SnapshotSource;
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::time::Instant;

/// Shared state for handlers.
#[derive(Clone)]
pub struct DashboardState {
    /// Snapshot provider, consulted once per pass.
    pub source: Arc<dyn SnapshotSource>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
    /// Summary of the most recent successful pass.
    pub last_pass: Arc<ArcSwapOption<PassSummary>>,
}

impl DashboardState {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            source,
            start_time: Instant::now(),
            last_pass: Arc::new(ArcSwapOption::empty()),
        }
    }

    pub fn last_pass(&self) -> Option<PassSummary> {
        self.last_pass.load().as_deref().copied()
    }

    pub(crate) fn record_pass(&self, summary: PassSummary) {
        self.last_pass.store(Some(Arc::new(summary)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use epochview_test_helpers::fixtures::empty_snapshot;

    #[test]
    fn test_record_pass() {
        let state = DashboardState::new(Arc::new(StaticSource::new("empty", empty_snapshot(2))));
        assert_eq!(state.last_pass(), None);

        let summary = PassSummary {
            epochs: 2,
            validators: 0,
        };
        state.clone().record_pass(summary);
        assert_eq!(state.last_pass(), Some(summary));
    }
}
