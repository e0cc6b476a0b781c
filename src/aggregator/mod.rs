//! Aggregation of execution traces into per-call gas tallies.
//!
//! This module transforms decoded execution traces into:
//! - Self gas per call (charges made directly by the call)
//! - Total gas per call (self gas plus all subcalls)
//! - Grand totals per root execution

pub mod tally;

// Re-export main types and functions
pub use tally::{grand_total, tally_calls, tally_roots, CallReport, Tally};
