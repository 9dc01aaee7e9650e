//! Visual encoding of validator figures.
//!
//! Pure functions that turn one validator's numbers into a [`BarSpec`]: an
//! ordered list of proportionally sized segments and the labels drawn next
//! to them. Normalization maxima come from the caller; nothing here scans
//! across validators.
//!
//! - [`pledge_bar`]: pledge width relative to the largest current pledge,
//!   labeled with whole tokens and share of total pledge
//! - [`production_bar`]: produced/missed split of expected blocks or chunks,
//!   with a minimum visible width for each segment
//! - [`role_label`], [`kickout_summary`]: short text tokens
//!
//! Widths are in abstract units; a front end picks the pixel scale.

mod bar;
mod labels;
mod pledge;
mod production;

pub use bar::{BarKind, BarPart, BarSpec};
pub use labels::{kickout_summary, role_label, KickoutSummary};
pub use pledge::{
    group_thousands, pledge_bar, BAR_SCALE, PLEDGE_BAR_BASELINE, PLEDGE_DISPLAY_UNIT,
};
pub use production::{production_bar, MIN_SEGMENT_WIDTH, PRODUCTION_BAR_BASELINE};
