//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod tally;
pub mod utils;

// Re-export main command functions
pub use tally::{display_depth_from_flag, execute_tally, validate_args, TallyArgs};
pub use utils::display_version;
