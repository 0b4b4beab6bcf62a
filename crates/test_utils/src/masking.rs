//! Stub masking service
//!
//! The real redaction algorithm lives outside this repository; tests use a
//! deterministic stand-in that keeps the first character and stars the rest,
//! which makes redacted output easy to assert against and is idempotent for
//! already-starred input in the way the production service is.

use core_kernel::{MaskingService, SensitiveCategory};

/// Deterministic masker for tests: first character kept, rest starred.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubMasker;

impl MaskingService for StubMasker {
    fn redact(&self, _category: SensitiveCategory, value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => {
                let rest = chars.count();
                let mut out = String::with_capacity(value.len());
                out.push(first);
                for _ in 0..rest {
                    out.push('*');
                }
                out
            }
            None => String::new(),
        }
    }
}

/// Masker that replaces every sensitive value with a fixed placeholder.
///
/// Useful when a test only cares that redaction happened, not what it
/// produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderMasker;

impl MaskingService for PlaceholderMasker {
    fn redact(&self, _category: SensitiveCategory, _value: &str) -> String {
        "***".to_string()
    }
}
