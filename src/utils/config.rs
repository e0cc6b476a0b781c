//! Configuration and constants for the CLI.

/// Indentation emitted once per call depth level
pub const INDENT_UNIT: &str = "  ";

/// Header row printed once before tabular (multi-message) reports
pub const TABULAR_HEADER: &str = "call\tself\ttotal";

/// Minimum width of the gas columns in tabular reports
pub const GAS_COLUMN_WIDTH: usize = 12;

// Caller/callee separators differ between the two report styles
pub const INLINE_ARROW: &str = "->";
pub const TABULAR_ARROW: &str = "→";

/// Prefix of the final line of inline reports
pub const TOTAL_LINE_PREFIX: &str = "Total gas: ";

/// Thousands separator used for gas amounts (English grouping)
pub const THOUSANDS_SEPARATOR: char = ',';
