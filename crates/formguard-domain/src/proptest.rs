//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Expression combinators (empty, AND, OR)
//! - Strict equality and inclusive ranges
//! - Fail-open handling of unknown operators
//! - Warnings never affecting validity

use crate::condition::{evaluate_condition, evaluate_condition_expression};
use crate::engine::ValidationEngine;
use crate::model::{
    Condition, ConditionExpression, FieldValues, FormDefinition, FormField, LogicalOperator,
    RuleType, ValidationRule,
};
use formguard_types::vocab::Operator;
use proptest::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// Strategies
// ============================================================================

fn arb_field_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,8}").unwrap()
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| json!(n)),
        (-1000.0f64..1000.0).prop_map(|f| json!(f)),
        prop::string::string_regex("[a-zA-Z0-9 ,]{0,12}")
            .unwrap()
            .prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(2, 8, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..3)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_operator_code() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(Operator::ALL.to_vec()).prop_map(|op| op.code().to_string()),
        prop::string::string_regex("[A-Za-z]{1,8}").unwrap(),
    ]
}

fn arb_condition(fields: Vec<String>) -> impl Strategy<Value = Condition> {
    (
        prop::sample::select(fields),
        arb_operator_code(),
        prop::option::of(arb_value()),
    )
        .prop_map(|(field, op, value)| Condition {
            right_field: Some(field),
            operator: op,
            value,
            value_type: None,
        })
}

fn arb_values(fields: Vec<String>) -> impl Strategy<Value = FieldValues> {
    prop::collection::btree_map(prop::sample::select(fields), arb_value(), 0..3)
}

const FIELDS: [&str; 4] = ["a", "b", "c", "d"];

fn field_names() -> Vec<String> {
    FIELDS.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// An expression with no conditions is satisfied under any values.
    #[test]
    fn empty_expression_is_true(vals in arb_values(field_names()), or in any::<bool>()) {
        let expr = ConditionExpression {
            logical_operator: Some(if or { LogicalOperator::Or } else { LogicalOperator::And }),
            conditions: vec![],
        };
        prop_assert!(evaluate_condition_expression(&expr, &vals));
    }

    /// OR is `any`, AND (or nothing) is `all`.
    #[test]
    fn combinators_match_any_and_all(
        conds in prop::collection::vec(arb_condition(field_names()), 1..5),
        vals in arb_values(field_names()),
    ) {
        let singles: Vec<bool> = conds.iter().map(|c| evaluate_condition(c, &vals)).collect();

        let or = ConditionExpression::any(conds.clone());
        let and = ConditionExpression::all(conds.clone());
        let implicit = ConditionExpression { logical_operator: None, conditions: conds };

        prop_assert_eq!(evaluate_condition_expression(&or, &vals), singles.iter().any(|b| *b));
        prop_assert_eq!(evaluate_condition_expression(&and, &vals), singles.iter().all(|b| *b));
        prop_assert_eq!(evaluate_condition_expression(&implicit, &vals), singles.iter().all(|b| *b));
    }

    /// EQ never coerces: an integer never equals its own string form.
    #[test]
    fn eq_does_not_coerce_strings(n in -10_000i64..10_000) {
        let mut vals = FieldValues::new();
        vals.insert("x".into(), json!(n));
        let c = Condition::new("x", "EQ").with_value(json!(n.to_string()));
        prop_assert!(!evaluate_condition(&c, &vals));
        let c = Condition::new("x", "EQ").with_value(json!(n));
        prop_assert!(evaluate_condition(&c, &vals));
    }

    /// EQ and NEQ are complementary for every pair of values.
    #[test]
    fn eq_and_neq_are_complementary(v in arb_value(), t in prop::option::of(arb_value())) {
        let mut vals = FieldValues::new();
        vals.insert("x".into(), v);
        let eq = Condition { right_field: Some("x".into()), operator: "EQ".into(), value: t.clone(), value_type: None };
        let neq = Condition { operator: "NEQ".into(), ..eq.clone() };
        prop_assert_ne!(evaluate_condition(&eq, &vals), evaluate_condition(&neq, &vals));
    }

    /// BETWEEN includes both bounds.
    #[test]
    fn between_is_inclusive(lo in -1000i64..1000, span in 0i64..1000) {
        let hi = lo + span;
        for probe in [lo, hi] {
            let mut vals = FieldValues::new();
            vals.insert("x".into(), json!(probe));
            let c = Condition::new("x", "BETWEEN").with_value(json!([lo, hi]));
            prop_assert!(evaluate_condition(&c, &vals));
        }
        let mut vals = FieldValues::new();
        vals.insert("x".into(), json!(hi + 1));
        let c = Condition::new("x", "BETWEEN").with_value(json!([lo, hi]));
        prop_assert!(!evaluate_condition(&c, &vals));
    }

    /// Operator codes outside the vocabulary always evaluate to true.
    #[test]
    fn unknown_operators_fail_open(
        op in prop::string::string_regex("[a-z]{1,8}").unwrap(),
        vals in arb_values(field_names()),
        target in prop::option::of(arb_value()),
    ) {
        prop_assume!(Operator::from_code(&op).is_none());
        let c = Condition { right_field: Some("a".into()), operator: op, value: target, value_type: None };
        prop_assert!(evaluate_condition(&c, &vals));
    }

    /// Rules of type WARNING never make a form invalid.
    #[test]
    fn warnings_never_affect_validity(
        conds in prop::collection::vec(arb_condition(field_names()), 0..4),
        vals in arb_values(field_names()),
    ) {
        let warning = ValidationRule {
            id: "w".into(),
            rule_type: RuleType::Warning,
            condition_expression: Some(ConditionExpression::all(conds)),
        };
        let mut field = FormField::new("a", "A", "TEXT");
        field.validations.push(warning.clone());
        let form = FormDefinition {
            fields: vec![field],
            validations: vec![warning],
            ..FormDefinition::default()
        };

        let result = ValidationEngine::new(&form, vals).validate_form();
        prop_assert!(result.is_valid);
        prop_assert!(result.errors.is_empty());
    }

    /// Loading never panics on arbitrary JSON.
    #[test]
    fn form_loading_is_total(v in arb_value()) {
        let _ = FormDefinition::from_value(v);
    }

    /// ISNN holds exactly for present values that are neither null nor empty strings.
    #[test]
    fn isnn_matches_present_non_empty_values(id in arb_field_id(), v in arb_scalar()) {
        let mut vals = FieldValues::new();
        vals.insert(id.clone(), v.clone());
        let expected = !(v.is_null() || v.as_str() == Some(""));
        prop_assert_eq!(evaluate_condition(&Condition::new(&id, "ISNN"), &vals), expected);
    }
}
