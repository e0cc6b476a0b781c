//! Plain-text call tree rendering.
//!
//! Renders tallies as an indented call tree, one line per call.
//! Gas amounts are grouped with thousands separators; method numbers
//! are printed as-is.

use crate::aggregator::{CallReport, Tally};
use crate::utils::config::{
    GAS_COLUMN_WIDTH, INDENT_UNIT, INLINE_ARROW, TABULAR_ARROW, TABULAR_HEADER,
    THOUSANDS_SEPARATOR, TOTAL_LINE_PREFIX,
};
use log::debug;

/// Layout of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// `from->to:method self:N total:N` lines followed by one grand total line
    Inline,
    /// Tab-separated columns under a `call self total` header, one label line per report
    Tabular,
}

/// Render reports as text
///
/// **Public** - main entry point for text output
///
/// # Arguments
/// * `reports` - Tallied root executions, in document order
/// * `style` - Line layout
/// * `display_depth` - Only calls with `depth < display_depth` are printed;
///   `None` prints every call. Totals always cover the full tree.
///
/// # Returns
/// The full report, newline-terminated
pub fn render_report(
    reports: &[CallReport],
    style: ReportStyle,
    display_depth: Option<usize>,
) -> String {
    let mut out = String::new();

    if style == ReportStyle::Tabular {
        out.push_str(TABULAR_HEADER);
        out.push('\n');
    }

    let mut total_gas: u64 = 0;
    for report in reports {
        if style == ReportStyle::Tabular {
            if let Some(label) = &report.label {
                out.push_str(label);
                out.push('\n');
            }
        }

        for tally in &report.tallies {
            if is_displayed(tally, display_depth) {
                out.push_str(&render_tally(tally, style));
                out.push('\n');
            }
        }

        let report_gas = report.grand_total();
        debug!(
            "Gas under {}: {}",
            report.label.as_deref().unwrap_or("root"),
            report_gas
        );
        total_gas = total_gas.saturating_add(report_gas);
    }

    if style == ReportStyle::Inline {
        out.push_str(TOTAL_LINE_PREFIX);
        out.push_str(&group_thousands(total_gas));
        out.push('\n');
    }

    out
}

/// Render a single call line (without trailing newline)
fn render_tally(tally: &Tally, style: ReportStyle) -> String {
    let indent = INDENT_UNIT.repeat(tally.depth);
    match style {
        ReportStyle::Inline => format!(
            "{}{}{}{}:{} self:{} total:{}",
            indent,
            tally.from,
            INLINE_ARROW,
            tally.to,
            tally.method,
            group_thousands(tally.self_gas),
            group_thousands(tally.total_gas),
        ),
        ReportStyle::Tabular => format!(
            "{}{}{}{}:{}\t{:>width$}\t{:>width$}",
            indent,
            tally.from,
            TABULAR_ARROW,
            tally.to,
            tally.method,
            group_thousands(tally.self_gas),
            group_thousands(tally.total_gas),
            width = GAS_COLUMN_WIDTH,
        ),
    }
}

/// Format an integer with English thousands grouping (`1234567` -> `1,234,567`)
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped
}

/// **Private** - depth filter for printed lines
fn is_displayed(tally: &Tally, display_depth: Option<usize>) -> bool {
    display_depth.map_or(true, |limit| tally.depth < limit)
}
