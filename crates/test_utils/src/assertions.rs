//! Assertion helpers for document JSON
//!
//! Small helpers over `serde_json::Value` that keep channel tests readable.

use serde_json::Value;

/// Asserts that a dotted path exists in the document and holds `expected`.
///
/// Panics with the path in the message, like the standard assert macros.
pub fn assert_json_at(document: &Value, path: &str, expected: &Value) {
    let actual = json_at(document, path)
        .unwrap_or_else(|| panic!("document has no value at `{path}`"));
    assert_eq!(actual, expected, "mismatch at `{path}`");
}

/// Asserts that the value at a dotted path is JSON `null` or absent.
pub fn assert_json_null_at(document: &Value, path: &str) {
    if let Some(actual) = json_at(document, path) {
        assert!(actual.is_null(), "expected null at `{path}`, got {actual}");
    }
}

/// Looks up a dotted path (`vehicleOwner.certNo`) in a JSON tree.
pub fn json_at<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}
