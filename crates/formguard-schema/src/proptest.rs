//! Property-based tests for the structural validator.
//!
//! Arbitrary JSON (and arbitrary text) must never panic, and every finding must be
//! anchored at one of the document's three roots.

use crate::{EffectiveConfig, check, count_fields, validate};
use formguard_types::{Verdict, ids};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        prop::string::string_regex("[A-Za-z0-9_%]{0,8}")
            .unwrap()
            .prop_map(Value::String),
        prop::sample::select(vec!["GROUP", "GRIDLKP", "SELECT", "CHECKBOX", "DATEPICKER", "EQ", "OR"])
            .prop_map(|s| json!(s)),
    ]
}

/// Keys drawn mostly from the form vocabulary so checks actually run.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "MenuID", "FormWidth", "Layout", "Label", "Fields", "Actions", "Validations", "Id",
            "type", "Type", "Width", "ChildFields", "EnabledWhen", "Conditions", "Operator",
            "RightField", "LoadDataInfo", "ColumnsDefinition", "OptionValues", "Value",
        ])
        .prop_map(str::to_string),
        "[a-z]{1,4}",
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map(arb_key(), inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Arbitrary JSON values never panic and always produce a coherent result.
    #[test]
    fn validate_is_total_on_values(doc in arb_json()) {
        let result = validate(&doc);
        prop_assert_eq!(result.is_valid, result.errors.is_empty());
    }

    /// Arbitrary text never panics; non-JSON is a single INVALID_JSON error.
    #[test]
    fn validate_is_total_on_text(text in ".{0,64}") {
        let result = validate(text.as_str());
        if serde_json::from_str::<Value>(&text).is_err() {
            prop_assert_eq!(result.errors.len(), 1);
            prop_assert_eq!(result.errors[0].code.as_str(), ids::CODE_INVALID_JSON);
        }
    }

    /// Finding paths start at `root`, `Fields`, or `Actions`.
    #[test]
    fn finding_paths_are_rooted(doc in arb_json()) {
        let result = validate(&doc);
        for finding in result.findings() {
            let p = finding.path.as_str();
            prop_assert!(
                p == "root" || p.starts_with("root.") || p.starts_with("Fields[") || p.starts_with("Actions["),
                "unexpected path {}", p
            );
        }
    }

    /// Errors are errors and warnings are warnings.
    #[test]
    fn result_lists_are_partitioned_by_severity(doc in arb_json()) {
        let result = validate(&doc);
        prop_assert!(result.errors.iter().all(|f| f.severity == formguard_types::Severity::Error));
        prop_assert!(result.warnings.iter().all(|f| f.severity == formguard_types::Severity::Warning));
    }

    /// The report verdict agrees with the raw result under the default policy.
    #[test]
    fn verdict_tracks_validity(doc in arb_json()) {
        let result = validate(&doc);
        let report = check(&doc, &EffectiveConfig { max_findings: usize::MAX, ..EffectiveConfig::default() });
        prop_assert_eq!(report.verdict == Verdict::Fail, !result.is_valid);
        prop_assert_eq!(report.data.findings_total as usize, result.errors.len() + result.warnings.len());
        prop_assert_eq!(report.data.fields_scanned as usize, count_fields(&doc));
    }
}
