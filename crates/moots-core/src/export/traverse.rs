//! Path-tracking accessors over a loosely typed JSON document.
//!
//! The export format is deeply nested and schema-less, so the fixed part of
//! the document is walked one step at a time through a [`Cursor`] that records
//! the dotted path it has descended. A shape change then surfaces as
//! "expected array at $.data.user.result.timeline.timeline.instructions"
//! instead of a panic in the middle of a chained dereference.

use serde_json::Value;
use thiserror::Error;

/// A required step of the document spine did not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// An object member the spine requires is absent.
    #[error("missing key at {0}")]
    MissingKey(String),
    /// A value exists but has the wrong JSON type.
    #[error("expected {expected} at {path}")]
    TypeMismatch { path: String, expected: &'static str },
}

/// A position inside the document plus the dotted path that led there.
#[derive(Debug)]
pub(super) struct Cursor<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Cursor<'a> {
    pub(super) fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: "$".to_string(),
        }
    }

    /// Descends into object member `key`. The current value must be an object
    /// and the member must exist.
    pub(super) fn member(&self, key: &str) -> Result<Cursor<'a>, TraversalError> {
        let object = self.value.as_object().ok_or_else(|| TraversalError::TypeMismatch {
            path: self.path.clone(),
            expected: "object",
        })?;
        let path = format!("{}.{}", self.path, key);
        let value = object
            .get(key)
            .ok_or_else(|| TraversalError::MissingKey(path.clone()))?;
        Ok(Cursor { value, path })
    }

    /// The current value as an array.
    pub(super) fn array(&self) -> Result<&'a [Value], TraversalError> {
        self.value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| TraversalError::TypeMismatch {
                path: self.path.clone(),
                expected: "array",
            })
    }
}
