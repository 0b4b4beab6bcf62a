//! Projection errors
//!
//! Projection failures are deterministic pure-function failures surfaced
//! immediately to the caller; nothing here is retried. Accessing an absent
//! sub-document is a consumer bug, not a projection failure: absence is
//! represented explicitly as `None` and must be checked before dereference.

use thiserror::Error;

/// Errors raised while projecting a document onto a serialization channel
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The document could not be serialized to a JSON tree
    #[error("Document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
