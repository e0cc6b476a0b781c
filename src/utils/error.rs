//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trace document
///
/// Every variant is fatal: the document is either fully decoded or rejected.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read trace file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Covers both malformed JSON syntax and documents of the wrong shape
    /// (missing `Msg`, `From`, `GasCharges`, wrong value types, ...)
    #[error("Failed to decode trace file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
