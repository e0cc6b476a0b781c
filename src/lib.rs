//! Gas Tally
//!
//! Self and total gas accounting for Filecoin Lotus
//! execution traces.
//!
//! This crate provides the core implementation for the
//! `gas-tally` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! gas-tally single --depth 2 cron-trace.json
//! gas-tally messages replay.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
