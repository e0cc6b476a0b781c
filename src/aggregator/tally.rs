//! Self and total gas accounting over an execution trace tree.
//!
//! Every call node yields one [`Tally`]. Tallies come out in call
//! sequence (pre-order): a node first, then each subcall's whole subtree
//! in the order the subcalls were made.

use crate::parser::{ExecutionTrace, RootTrace};
use log::debug;

/// Gas accounting for a single call
///
/// **Public** - consumed by the report renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub from: String,
    pub to: String,

    /// Call depth, 0 for the root execution
    pub depth: usize,

    pub method: u64,

    /// Gas charged by this call alone
    pub self_gas: u64,

    /// Self gas plus the total gas of every subcall
    pub total_gas: u64,
}

/// Tallies of one root execution
#[derive(Debug, Clone)]
pub struct CallReport {
    /// Label of the root (message CID), if the document provides one
    pub label: Option<String>,

    /// Tallies in call sequence, root first
    pub tallies: Vec<Tally>,
}

impl CallReport {
    /// Sum of self gas over every call in this report
    pub fn grand_total(&self) -> u64 {
        grand_total(&self.tallies)
    }
}

/// Tally the gas consumption of a call and its subcalls
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `trace` - Execution to tally
/// * `depth` - Depth of `trace` in the full call tree (0 for a root)
///
/// # Returns
/// Tallies in call sequence. The first element always describes `trace`.
///
/// # Algorithm
/// 1. Sum the node's gas charges as floating point, truncate once
/// 2. Push the node's own tally, total = self for now
/// 3. Recurse into each subcall, appending its whole subtree
/// 4. Add the subcall roots' totals to the node's total
pub fn tally_calls(trace: &ExecutionTrace, depth: usize) -> Vec<Tally> {
    let self_gas: f64 = trace.gas_charges.iter().map(|charge| charge.tg).sum();
    let self_gas = self_gas as u64;

    let mut result = vec![Tally {
        from: trace.msg.from.clone(),
        to: trace.msg.to.clone(),
        depth,
        method: trace.msg.method,
        self_gas,
        total_gas: self_gas,
    }];

    let mut subcall_gas: u64 = 0;
    for call in trace.subcalls() {
        let sub_result = tally_calls(call, depth + 1);
        subcall_gas = subcall_gas.saturating_add(sub_result[0].total_gas);
        result.extend(sub_result);
    }

    result[0].total_gas = result[0].total_gas.saturating_add(subcall_gas);
    result
}

/// Running sum of self gas across a tally sequence
///
/// For a full subtree this equals the root's total gas.
pub fn grand_total(tallies: &[Tally]) -> u64 {
    tallies
        .iter()
        .fold(0u64, |total, tally| total.saturating_add(tally.self_gas))
}

/// Tally each root execution independently
///
/// **Public** - used by commands for multi-root documents
pub fn tally_roots(roots: &[RootTrace]) -> Vec<CallReport> {
    roots
        .iter()
        .map(|root| {
            let tallies = tally_calls(&root.trace, 0);
            debug!(
                "Tallied {} call(s) under {}",
                tallies.len(),
                root.label.as_deref().unwrap_or("root")
            );
            CallReport {
                label: root.label.clone(),
                tallies,
            }
        })
        .collect()
}
