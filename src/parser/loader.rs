//! Trace document loader.
//!
//! Reads a trace file once, decodes it into the typed layout selected by
//! [`DocumentShape`], and hands back the root executions it contains.

use super::schema::{ExecutionTrace, MessagesDocument, SingleRootDocument};
use crate::output::ReportStyle;
use crate::utils::error::LoadError;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Supported trace document layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// `{"value": {"active": {"ExecutionTrace": ...}}}`
    SingleRoot,
    /// `{"Trace": [{"MsgCid": {"/": ...}, "ExecutionTrace": ...}, ...]}`
    Messages,
}

impl DocumentShape {
    /// Report style conventionally used for this layout
    pub fn report_style(self) -> ReportStyle {
        match self {
            DocumentShape::SingleRoot => ReportStyle::Inline,
            DocumentShape::Messages => ReportStyle::Tabular,
        }
    }
}

/// A root execution located in a trace document
#[derive(Debug, Clone)]
pub struct RootTrace {
    /// Message CID for multi-message documents, `None` for single-root ones
    pub label: Option<String>,

    pub trace: ExecutionTrace,
}

/// Load the root executions of a trace file
///
/// **Public** - main entry point for loading
///
/// # Returns
/// Root traces in document order. A single-root document always yields
/// exactly one entry; a messages document yields one per top-level message.
///
/// # Errors
/// * `LoadError::ReadFailed` - File missing or unreadable
/// * `LoadError::Decode` - Invalid JSON or unexpected shape
pub fn load_roots(path: impl AsRef<Path>, shape: DocumentShape) -> Result<Vec<RootTrace>, LoadError> {
    let path = path.as_ref();

    let roots = match shape {
        DocumentShape::SingleRoot => {
            let doc: SingleRootDocument = load_document(path)?;
            vec![RootTrace {
                label: None,
                trace: doc.value.active.execution_trace,
            }]
        }
        DocumentShape::Messages => {
            let doc: MessagesDocument = load_document(path)?;
            doc.trace
                .into_iter()
                .map(|msg| RootTrace {
                    label: Some(msg.msg_cid.cid),
                    trace: msg.execution_trace,
                })
                .collect()
        }
    };

    debug!("Located {} root trace(s) in {}", roots.len(), path.display());

    Ok(roots)
}

/// Read and decode a JSON file into `T`
///
/// **Public** - shared by every document shape
pub fn load_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();

    let raw = std::fs::read(path).map_err(|source| LoadError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes from {}", raw.len(), path.display());

    decode_unbounded(&raw).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode JSON without serde_json's nesting limit
///
/// **Private** - call trees nest two JSON levels per call, so the default
/// limit of 128 would reject traces deeper than ~60 calls. The stack grows
/// on demand instead of overflowing.
fn decode_unbounded<T: DeserializeOwned>(raw: &[u8]) -> Result<T, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(raw);
    deserializer.disable_recursion_limit();

    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;

    Ok(value)
}
