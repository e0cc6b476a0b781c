//! Tally command implementation.
//!
//! The tally command:
//! 1. Loads the trace document
//! 2. Tallies every root execution
//! 3. Renders the call tree
//! 4. Writes the report

use crate::aggregator::tally_roots;
use crate::output::render_report;
use crate::parser::{load_roots, DocumentShape};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the tally command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TallyArgs {
    /// Path to the trace JSON file
    pub trace_path: PathBuf,

    /// Layout of the trace document
    pub shape: DocumentShape,

    /// Deepest call depth (exclusive) to print; `None` prints all calls
    pub display_depth: Option<usize>,
}

impl Default for TallyArgs {
    fn default() -> Self {
        Self {
            trace_path: PathBuf::new(),
            shape: DocumentShape::SingleRoot,
            display_depth: None,
        }
    }
}

/// Execute the tally command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Tally command arguments
/// * `out` - Sink for the rendered report (stdout in the CLI)
///
/// # Errors
/// * Trace file missing or unreadable
/// * Invalid JSON or unexpected trace shape
/// * Write failure on `out`
///
/// Nothing is written unless the whole document loads and tallies.
pub fn execute_tally(args: &TallyArgs, out: &mut impl Write) -> Result<()> {
    info!("Tallying gas for trace: {}", args.trace_path.display());

    let roots = load_roots(&args.trace_path, args.shape)
        .with_context(|| format!("Failed to load trace {}", args.trace_path.display()))?;

    let reports = tally_roots(&roots);
    let call_count: usize = reports.iter().map(|r| r.tallies.len()).sum();
    debug!("Tallied {} call(s) across {} root(s)", call_count, reports.len());

    let rendered = render_report(&reports, args.shape.report_style(), args.display_depth);

    out.write_all(rendered.as_bytes())
        .context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    Ok(())
}

/// Convert the signed `--depth` flag into a display depth
///
/// Values <= 0 display no calls; `None` displays all of them.
pub fn display_depth_from_flag(depth: Option<i64>) -> Option<usize> {
    depth.map(|depth| usize::try_from(depth).unwrap_or(0))
}

/// Validate tally arguments
///
/// **Public** - can be called before execute_tally for early validation
pub fn validate_args(args: &TallyArgs) -> Result<()> {
    if args.trace_path.as_os_str().is_empty() {
        anyhow::bail!("Trace file path cannot be empty");
    }

    if args.trace_path.is_dir() {
        anyhow::bail!("Trace path is a directory: {}", args.trace_path.display());
    }

    Ok(())
}
