//! Trace loading and schema definitions.
//!
//! This module handles:
//! - Reading trace files from disk
//! - Decoding the two supported document layouts
//! - Defining the typed execution trace schema

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_document, load_roots, DocumentShape, RootTrace};
pub use schema::{ExecutionTrace, GasCharge, Message};
