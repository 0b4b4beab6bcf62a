//! Masking machinery for sensitive document fields
//!
//! A handful of fields across the proposal documents (holder name, agent
//! name, vehicle owner identity) are sensitive. The canonical value is kept
//! in the assembled document and stays readable for internal consumers;
//! redaction is applied only on the boundary that serializes a document for
//! an external consumer.
//!
//! The redaction character policy itself belongs to an external masking
//! service. This module defines the call site: a declarative field-path ->
//! category table ([`MaskingPolicy`]) consulted while walking the serialized
//! document, so the masking policy stays auditable and testable apart from
//! the data shapes.

use serde_json::Value;
use std::collections::HashMap;

/// Sensitivity category attached to a masked field.
///
/// Only the default category is in use today; the category is still carried
/// through the service call so a richer taxonomy can be added without
/// touching the policy table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensitiveCategory {
    Default,
}

/// External collaborator that produces the redacted form of a value.
///
/// Implementations must be idempotent: redacting an already-redacted value
/// yields the same redacted value.
pub trait MaskingService: Send + Sync {
    fn redact(&self, category: SensitiveCategory, value: &str) -> String;
}

/// A declarative table mapping dotted field paths to sensitivity categories.
///
/// Paths are relative to the document root; elements of an array keep the
/// path of the list field itself, so `vehicleOwner.certNo` matches the
/// `certNo` field of the `vehicleOwner` sub-document while leaving the
/// `certNo` of every participant untouched.
#[derive(Debug, Clone, Default)]
pub struct MaskingPolicy {
    entries: HashMap<&'static str, SensitiveCategory>,
}

impl MaskingPolicy {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, SensitiveCategory)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Looks up the sensitivity category for a dotted field path.
    pub fn category_of(&self, path: &str) -> Option<SensitiveCategory> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Redacts every tagged string field of `document` in place.
    ///
    /// Non-string and null values under a tagged path are left untouched:
    /// absence means "not populated", and masking never invents a value.
    pub fn apply(&self, service: &dyn MaskingService, document: &mut Value) {
        if self.entries.is_empty() {
            return;
        }
        let mut path = String::new();
        self.walk(service, document, &mut path);
    }

    fn walk(&self, service: &dyn MaskingService, value: &mut Value, path: &mut String) {
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter_mut() {
                    let saved = path.len();
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                    if let (Some(category), Value::String(s)) =
                        (self.category_of(path), &mut *child)
                    {
                        *s = service.redact(category, s);
                    } else {
                        self.walk(service, child, path);
                    }
                    path.truncate(saved);
                }
            }
            Value::Array(items) => {
                // Array elements keep the list field's own path.
                for item in items.iter_mut() {
                    self.walk(service, item, path);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Star;

    impl MaskingService for Star {
        fn redact(&self, _category: SensitiveCategory, _value: &str) -> String {
            "***".to_string()
        }
    }

    fn policy() -> MaskingPolicy {
        MaskingPolicy::new([
            ("holderName", SensitiveCategory::Default),
            ("owner.certNo", SensitiveCategory::Default),
        ])
    }

    #[test]
    fn test_redacts_only_tagged_paths() {
        let mut doc = json!({
            "holderName": "张三",
            "certNo": "110101199001010011",
            "owner": { "certNo": "110101199001010011", "name": "李四" },
        });
        policy().apply(&Star, &mut doc);
        assert_eq!(doc["holderName"], "***");
        assert_eq!(doc["owner"]["certNo"], "***");
        // An untagged field with the same name stays canonical.
        assert_eq!(doc["certNo"], "110101199001010011");
        assert_eq!(doc["owner"]["name"], "李四");
    }

    #[test]
    fn test_array_elements_keep_list_path() {
        let policy = MaskingPolicy::new([("owners.certNo", SensitiveCategory::Default)]);
        let mut doc = json!({ "owners": [{ "certNo": "a" }, { "certNo": "b" }] });
        policy.apply(&Star, &mut doc);
        assert_eq!(doc["owners"][0]["certNo"], "***");
        assert_eq!(doc["owners"][1]["certNo"], "***");
    }

    #[test]
    fn test_null_under_tagged_path_is_untouched() {
        let mut doc = json!({ "holderName": null });
        policy().apply(&Star, &mut doc);
        assert!(doc["holderName"].is_null());
    }
}
