//! Epoch validators table.
//!
//! One pass turns an [`EpochInfoSnapshot`](epochview_types::EpochInfoSnapshot)
//! into an [`EpochValidatorsTable`]:
//!
//! 1. [`populate`] merges every source list into a fresh registry
//! 2. [`Normalization`] fixes the scale shared by all bars
//! 3. the registry's sorted view is encoded row by row
//!
//! Nothing survives between passes. [`render_text`] draws the result for a
//! terminal; the server serves it as JSON.

mod assemble;
mod normalization;
mod render;
mod table;

pub use assemble::{populate, AssembleError, Population};
pub use normalization::Normalization;
pub use render::{render_bar, render_text, UNITS_PER_GLYPH};
pub use table::{Cell, EpochValidatorsTable, HeaderGroup, ValidatorRow, FIXED_COLUMNS};
