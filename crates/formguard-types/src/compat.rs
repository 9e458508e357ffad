//! Accessors for raw (untrusted) form documents.
//!
//! Stored documents carry both the current lowercase property names (`label`, `type`,
//! `required`) and the older PascalCase spellings (`Label`, `Type`, `Required`). Every
//! reader of raw JSON goes through [`field_prop`] so the two spellings stay equivalent.

use serde_json::Value;

/// Canonical property name paired with its legacy spelling.
pub const LEGACY_FIELD_KEYS: &[(&str, &str)] = &[
    ("label", "Label"),
    ("type", "Type"),
    ("required", "Required"),
];

/// Legacy spelling of a canonical field property, if it has one.
pub fn legacy_key(canonical: &str) -> Option<&'static str> {
    LEGACY_FIELD_KEYS
        .iter()
        .find(|(current, _)| *current == canonical)
        .map(|(_, legacy)| *legacy)
}

/// Read a field property, falling back to the legacy spelling when the canonical
/// key is absent or carries no value.
pub fn field_prop<'a>(field: &'a Value, canonical: &str) -> Option<&'a Value> {
    let current = field.get(canonical);
    if has_value(current) {
        return current;
    }
    legacy_key(canonical)
        .and_then(|legacy| field.get(legacy))
        .filter(|v| has_value(Some(v)))
        .or(current)
}

/// Whether a raw property counts as "set".
///
/// Absent, `null`, `false`, `0`, and `""` do not. Every structural "is required"
/// check uses this so an empty string is reported the same way as a missing key.
pub fn has_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Convenience: the property as a non-empty string.
pub fn str_prop<'a>(obj: &'a Value, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_legacy_spelling_when_current_is_missing() {
        let field = json!({"Id": "f1", "Type": "TEXT", "Label": "Name"});
        assert_eq!(field_prop(&field, "type"), Some(&json!("TEXT")));
        assert_eq!(field_prop(&field, "label"), Some(&json!("Name")));
    }

    #[test]
    fn current_spelling_wins_when_both_are_set() {
        let field = json!({"type": "SELECT", "Type": "TEXT"});
        assert_eq!(field_prop(&field, "type"), Some(&json!("SELECT")));
    }

    #[test]
    fn empty_current_value_falls_back_to_legacy() {
        let field = json!({"label": "", "Label": "Amount"});
        assert_eq!(field_prop(&field, "label"), Some(&json!("Amount")));
    }

    #[test]
    fn keys_without_legacy_spelling_read_directly() {
        let field = json!({"Id": "x"});
        assert_eq!(field_prop(&field, "Id"), Some(&json!("x")));
        assert_eq!(field_prop(&field, "Width"), None);
    }

    #[test]
    fn presence_rules() {
        assert!(!has_value(None));
        assert!(!has_value(Some(&json!(null))));
        assert!(!has_value(Some(&json!(false))));
        assert!(!has_value(Some(&json!(0))));
        assert!(!has_value(Some(&json!(""))));
        assert!(has_value(Some(&json!("x"))));
        assert!(has_value(Some(&json!(1.5))));
        assert!(has_value(Some(&json!([]))));
        assert!(has_value(Some(&json!({}))));
    }
}
