//! Inline structural pre-check run before a document is handed to the engine.
//!
//! Much lighter than the structural validator: it only confirms that the keys the
//! engine relies on exist, and reports in the engine's own result shape.

use crate::report::{SCHEMA_FIELD_ID, ValidationError, ValidationResult};
use formguard_types::compat::{field_prop, has_value};
use serde_json::Value;

/// Top-level keys that must be present (any value, including `null`).
pub const REQUIRED_TOP_LEVEL: &[&str] = &["MenuID", "FormWidth", "Layout", "Label", "Fields"];

/// Per-field properties that must be set, in reporting order.
const REQUIRED_FIELD_PROPS: &[&str] = &["Id", "type", "label"];

pub fn validate_json_schema(document: &Value) -> ValidationResult {
    let mut errors = Vec::new();

    let root = document.as_object();
    for prop in REQUIRED_TOP_LEVEL {
        if !root.is_some_and(|obj| obj.contains_key(*prop)) {
            errors.push(ValidationError::plain(
                SCHEMA_FIELD_ID,
                format!("Missing required property: {prop}"),
            ));
        }
    }

    if let Some(fields) = document.get("Fields").and_then(Value::as_array) {
        for (index, field) in fields.iter().enumerate() {
            for prop in REQUIRED_FIELD_PROPS {
                if !has_value(field_prop(field, prop)) {
                    errors.push(ValidationError::plain(
                        format!("field_{index}"),
                        format!("Field {}: Missing {prop} property", index + 1),
                    ));
                }
            }
        }
    }

    ValidationResult::new(errors, Vec::new())
}
