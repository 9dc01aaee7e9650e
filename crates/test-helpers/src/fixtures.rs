//! Prebuilt snapshots.

use crate::{tokens, SnapshotBuilder};
use epochview_types::{EpochInfoSnapshot, KickoutReason};
use serde_json::json;

/// Account ids of [`sample_snapshot`] in expected display order.
pub const SAMPLE_DISPLAY_ORDER: [&str; 8] = [
    "node0.unc", // current, 3000
    "node1.unc", // current, 2000
    "node2.unc", // current, 1000
    "node3.unc", // next only
    "node4.unc", // proposal only
    "node5.unc", // kickout, first seen
    "node6.unc", // kickout
    "node7.unc", // oldest epoch role only
];

/// A five-epoch window exercising every source list.
///
/// - `node0`..`node2` are current validators; `node1` has a poor block
///   ratio and no expected chunks, `node2` expects no blocks
/// - `node3` joins next epoch, `node4` only has a proposal
/// - `node5` was kicked out for missing blocks, `node6` for a reason this
///   crate does not know
/// - `node7` only appears as a block producer in the oldest epoch
pub fn sample_snapshot() -> EpochInfoSnapshot {
    SnapshotBuilder::new(5)
        .epoch_id(0, "Ab12NextEpoch")
        .epoch_id(1, "Cd34CurrentEpoch")
        .epoch_id(2, "Ef56")
        .epoch_id(3, "Gh78")
        .epoch_id(4, "Ij90")
        .current_validator("node0.unc", tokens(3000), &[0], (50, 50), (99, 100))
        .current_validator("node1.unc", tokens(2000), &[1], (10, 40), (0, 0))
        .current_validator("node2.unc", tokens(1000), &[0, 1], (0, 0), (60, 60))
        .next_validator("node0.unc", tokens(3100), &[1])
        .next_validator("node1.unc", tokens(2000), &[0])
        .next_validator("node3.unc", tokens(1500), &[0])
        .proposal("node4.unc", tokens(500))
        .proposal("node0.unc", tokens(3100))
        .kickout(
            "node5.unc",
            KickoutReason::NotEnoughBlocks {
                expected: 40,
                produced: 3,
            },
        )
        .kickout("node6.unc", KickoutReason::Other(json!("Unpowered")))
        .block_producer(0, "node0.unc")
        .block_producer(0, "node1.unc")
        .block_producer(0, "node3.unc")
        .chunk_only_producer(0, "node2.unc")
        .block_producer(1, "node0.unc")
        .block_producer(1, "node1.unc")
        .chunk_only_producer(1, "node2.unc")
        .block_producer(2, "node0.unc")
        .block_producer(2, "node5.unc")
        .block_producer(3, "node5.unc")
        .chunk_only_producer(3, "node6.unc")
        .block_producer(4, "node7.unc")
        .build()
}

/// [`sample_snapshot`] as node JSON.
pub fn sample_snapshot_json() -> String {
    serde_json::to_string_pretty(&sample_snapshot()).expect("snapshot serializes")
}

/// A window with no validators at all.
pub fn empty_snapshot(num_epochs: usize) -> EpochInfoSnapshot {
    SnapshotBuilder::new(num_epochs).build()
}
