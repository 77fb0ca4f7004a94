//! Followers-export parsing: find the mutuals in a timeline document.
//!
//! One export file holds one JSON document. The interesting part sits behind a
//! fixed spine (`data.user.result.timeline.timeline.instructions`); each
//! instruction may carry an `entries` array whose `TimelineTimelineItem`
//! entries describe one account each. A mutual is an account with both
//! `followed_by` and `following` set in its legacy attributes.

mod extract;
mod traverse;

pub use extract::mutuals_from_value;
pub use traverse::TraversalError;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::MutualRecord;

/// Why a single export file could not be processed. Each variant aborts that
/// file only; the caller logs it and moves on to the next file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The file could not be read at all.
    #[error("read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
    /// The bytes are not valid JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    /// Valid JSON, but not the expected export shape.
    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

/// Parses one export file and returns its mutuals in document order.
pub fn mutuals_from_path(path: &Path) -> Result<Vec<MutualRecord>, ExportError> {
    let bytes = std::fs::read(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    mutuals_from_slice(&bytes)
}

/// Parses one export document from raw bytes.
pub fn mutuals_from_slice(bytes: &[u8]) -> Result<Vec<MutualRecord>, ExportError> {
    let doc: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(mutuals_from_value(&doc)?)
}
