//! Error taxonomy for payload normalization.
//!
//! Only two things can make a well-formed document fail: an id-keyed entry
//! that must exist but does not, and a numeric field holding something that
//! is not a number. Every other gap in the payload resolves to a default.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// No entry in an id-keyed array carried the identifier being looked up.
    #[error("required telemetry field missing: {field} (no entry with id {id} in {path})")]
    MissingRequiredField {
        /// Snapshot field the entry feeds.
        field: &'static str,
        /// Dotted payload path of the array that was searched.
        path: &'static str,
        id: i64,
    },

    /// A field that must be numeric held a value that cannot be read as one.
    #[error("cannot coerce {field} to {expected}: found {found}")]
    TypeCoercion {
        field: &'static str,
        expected: &'static str,
        /// JSON rendering of the offending value.
        found: String,
    },

    /// The raw bytes handed to [`normalize_slice`](crate::normalize_slice)
    /// were not JSON at all.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl NormalizeError {
    /// Name of the snapshot field the error is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            NormalizeError::MissingRequiredField { field, .. }
            | NormalizeError::TypeCoercion { field, .. } => Some(*field),
            NormalizeError::MalformedPayload(_) => None,
        }
    }
}
