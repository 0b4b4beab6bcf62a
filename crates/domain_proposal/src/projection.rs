//! Serialization channels for assembled documents
//!
//! A document serializes on one of two channels:
//!
//! - **internal** — consumers inside the service boundary; canonical
//!   values, no redaction.
//! - **external** — anything leaving the process boundary; every field in
//!   the sensitive-field table is redacted by the masking service first.
//!
//! The sensitive-field table is the single auditable list of masked paths.
//! Masking is a presentation-time transform: the in-memory aggregate always
//! carries the canonical value, and nothing here writes back to it.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;

use core_kernel::{MaskingPolicy, MaskingService, SensitiveCategory};

use crate::error::ProjectionError;
use crate::proposal::Proposal;
use crate::quotation::Quotation;

/// Dotted paths of every sensitive field across the document family.
///
/// Note the vehicle owner's `certNo` is tagged while participant `certNo`
/// fields are not; the table is path-keyed for exactly this reason.
static SENSITIVE_FIELDS: Lazy<MaskingPolicy> = Lazy::new(|| {
    MaskingPolicy::new([
        ("recordHolderName", SensitiveCategory::Default),
        ("handlerName", SensitiveCategory::Default),
        ("agentName", SensitiveCategory::Default),
        ("vehicleOwner.certNo", SensitiveCategory::Default),
        ("vehicleOwner.vehicleOwnerName", SensitiveCategory::Default),
    ])
});

/// The sensitive-field table applied on the external channel.
pub fn sensitive_fields() -> &'static MaskingPolicy {
    &SENSITIVE_FIELDS
}

/// Marker for the document types this module projects.
pub trait Document: Serialize {}

impl Document for Quotation {}
impl Document for Proposal {}

/// Serializes a document for internal consumers, canonical values intact.
pub fn internal_document<T: Document>(document: &T) -> Result<Value, ProjectionError> {
    Ok(serde_json::to_value(document)?)
}

/// Serializes a document for an external consumer.
///
/// The sensitive-field table is applied exactly once, after serialization;
/// the in-memory document is not touched.
pub fn external_document<T: Document>(
    document: &T,
    masker: &dyn MaskingService,
) -> Result<Value, ProjectionError> {
    let mut value = serde_json::to_value(document)?;
    SENSITIVE_FIELDS.apply(masker, &mut value);
    Ok(value)
}
