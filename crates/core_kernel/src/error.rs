//! Core error types used across the projection layer

use thiserror::Error;

use crate::money::MoneyError;
use crate::temporal::WIRE_PATTERN_NAME;

/// A malformed or out-of-range temporal string was encountered during decode.
///
/// The error carries the path of the offending field because dozens of
/// fields across the aggregates share the same codec; without the path the
/// failure would be impossible to attribute.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("malformed temporal value \"{value}\" at `{field}`: expected {WIRE_PATTERN_NAME}")]
pub struct FormatError {
    /// Dotted path of the field that failed to decode
    pub field: String,
    /// The offending raw value
    pub value: String,
}

impl FormatError {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Temporal format error: {0}")]
    Format(#[from] FormatError),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
