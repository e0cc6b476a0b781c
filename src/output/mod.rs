//! Output rendering for gas tallies.
//!
//! This module turns tallies into human-readable text:
//! - Inline call tree with a grand total line
//! - Tab-separated call tree, one labelled block per message

pub mod text;

// Re-export main functions
pub use text::{group_thousands, render_report, ReportStyle};
