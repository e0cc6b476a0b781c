//! Input JSON schema definitions for Lotus execution traces.
//!
//! These types mirror the subset of the Lotus trace JSON we read.
//! Unknown fields are ignored; anything missing or of the wrong type
//! is a decode error.

use serde::{Deserialize, Deserializer};

/// One message execution and all messages it synchronously triggered
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExecutionTrace {
    /// The message that was executed
    #[serde(rename = "Msg")]
    pub msg: Message,

    /// Gas charged directly by this execution, in charge order
    #[serde(rename = "GasCharges")]
    pub gas_charges: Vec<GasCharge>,

    /// Nested calls in execution order (absent or null for a leaf)
    #[serde(rename = "Subcalls", default)]
    pub subcalls: Option<Vec<ExecutionTrace>>,
}

impl ExecutionTrace {
    /// Nested calls, empty for a leaf
    pub fn subcalls(&self) -> &[ExecutionTrace] {
        self.subcalls.as_deref().unwrap_or_default()
    }
}

/// Message header of an execution
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    #[serde(rename = "From")]
    pub from: String,

    #[serde(rename = "To")]
    pub to: String,

    /// Method number; Lotus emits it as a JSON number
    #[serde(rename = "Method", deserialize_with = "method_from_number")]
    pub method: u64,
}

/// A single gas charge
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GasCharge {
    /// Total gas of the charge. Kept as float: charges are summed before truncation.
    pub tg: f64,
}

/// `{"value": {"active": {"ExecutionTrace": ...}}}`
///
/// Layout of a state-level trace with one root execution (e.g. cron).
#[derive(Debug, Clone, Deserialize)]
pub struct SingleRootDocument {
    pub value: SingleRootValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleRootValue {
    pub active: ActiveExecution,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActiveExecution {
    #[serde(rename = "ExecutionTrace")]
    pub execution_trace: ExecutionTrace,
}

/// `{"Trace": [{"MsgCid": {"/": ...}, "ExecutionTrace": ...}, ...]}`
///
/// Layout of a tipset replay with one entry per top-level message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesDocument {
    #[serde(rename = "Trace")]
    pub trace: Vec<TopLevelMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopLevelMessage {
    #[serde(rename = "MsgCid")]
    pub msg_cid: CidLink,

    #[serde(rename = "ExecutionTrace")]
    pub execution_trace: ExecutionTrace,
}

/// IPLD link encoding of a CID
#[derive(Debug, Clone, Deserialize)]
pub struct CidLink {
    #[serde(rename = "/")]
    pub cid: String,
}

/// Accept any JSON number and truncate it to an unsigned method number
///
/// **Private** - serde helper for `Message::method`
fn method_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw as u64)
}
