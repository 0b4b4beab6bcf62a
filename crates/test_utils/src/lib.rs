//! Test Utilities Crate
//!
//! Shared test infrastructure for the proposal projection test suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built wire values, records, and column payloads
//! - `builders`: builder patterns for quotation and proposal documents
//! - `masking`: a stub masking service standing in for the real redactor
//! - `generators`: property-based test data strategies
//! - `assertions`: JSON assertion helpers for document tests

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod masking;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use masking::*;
