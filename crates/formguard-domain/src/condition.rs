//! Condition evaluation over a field-value map.
//!
//! Every operator is total: malformed operands make a condition false (or true for
//! the negated operators), never an error.

use crate::coerce::{display_string, is_empty_value, strict_equals, to_number};
use crate::model::{Condition, ConditionExpression, FieldValues, LogicalOperator};
use formguard_types::vocab::Operator;
use serde_json::Value;

/// Result of a condition whose operator code is not in the vocabulary.
/// Unknown operators fail open.
pub const UNKNOWN_OPERATOR_RESULT: bool = true;

/// Stand-in for an operand of `GT`/`GTE`/`LT`/`LTE` that does not cast to a number.
/// The comparison still runs, so `"abc" GTE 0` is true and `"abc" LTE -1` is false.
pub const NON_NUMERIC_OPERAND: f64 = 0.0;

/// Evaluate a single condition against the current values.
pub fn evaluate_condition(condition: &Condition, values: &FieldValues) -> bool {
    let actual = condition
        .right_field
        .as_deref()
        .and_then(|field| values.get(field));
    let expected = condition.value.as_ref();

    match Operator::from_code(&condition.operator) {
        Some(op) => apply_operator(op, actual, expected),
        None => {
            tracing::warn!(
                operator = %condition.operator,
                field = condition.right_field.as_deref().unwrap_or_default(),
                "unknown condition operator, treating condition as satisfied"
            );
            UNKNOWN_OPERATOR_RESULT
        }
    }
}

/// Combine the conditions of an expression. No conditions means satisfied.
pub fn evaluate_condition_expression(expression: &ConditionExpression, values: &FieldValues) -> bool {
    if expression.conditions.is_empty() {
        return true;
    }

    let mut results = expression
        .conditions
        .iter()
        .map(|c| evaluate_condition(c, values));

    match expression.logical_operator {
        Some(LogicalOperator::Or) => results.any(|r| r),
        _ => results.all(|r| r),
    }
}

/// Apply an operator to the field's value (`actual`) and the condition's literal (`expected`).
pub fn apply_operator(op: Operator, actual: Option<&Value>, expected: Option<&Value>) -> bool {
    match op {
        Operator::Eq => strict_equals(actual, expected),
        Operator::Neq => !strict_equals(actual, expected),
        Operator::Contains => text_test(actual, expected, |v, t| v.contains(t)),
        Operator::NotContains => !text_test(actual, expected, |v, t| v.contains(t)),
        Operator::StartsWith => text_test(actual, expected, |v, t| v.starts_with(t)),
        Operator::EndsWith => text_test(actual, expected, |v, t| v.ends_with(t)),
        Operator::In => value_in(actual, expected),
        Operator::NotIn => !value_in(actual, expected),
        Operator::Gt => numeric_operand(actual) > numeric_operand(expected),
        Operator::Gte => numeric_operand(actual) >= numeric_operand(expected),
        Operator::Lt => numeric_operand(actual) < numeric_operand(expected),
        Operator::Lte => numeric_operand(actual) <= numeric_operand(expected),
        Operator::IsNull => is_empty_value(actual),
        Operator::IsNotNull => !is_empty_value(actual),
        Operator::IsTrue => is_true(actual),
        Operator::IsFalse => is_false(actual),
        Operator::Between => value_between(actual, expected),
        // Previous values are not tracked.
        Operator::Changed => false,
    }
}

fn text_test(actual: Option<&Value>, expected: Option<&Value>, test: fn(&str, &str) -> bool) -> bool {
    match (actual, expected) {
        (Some(Value::String(v)), Some(Value::String(t))) => {
            test(&v.to_lowercase(), &t.to_lowercase())
        }
        _ => false,
    }
}

fn value_in(actual: Option<&Value>, expected: Option<&Value>) -> bool {
    match expected {
        Some(Value::Array(items)) => items.iter().any(|item| strict_equals(actual, Some(item))),
        Some(Value::String(list)) => {
            let needle = display_string(actual);
            list.split(',').map(str::trim).any(|entry| entry == needle)
        }
        _ => false,
    }
}

fn numeric_operand(value: Option<&Value>) -> f64 {
    let n = to_number(value);
    if n.is_nan() { NON_NUMERIC_OPERAND } else { n }
}

fn value_between(actual: Option<&Value>, expected: Option<&Value>) -> bool {
    let Some(Value::Array(bounds)) = expected else {
        return false;
    };
    let [min, max] = bounds.as_slice() else {
        return false;
    };

    let n = to_number(actual);
    let lo = to_number(Some(min));
    let hi = to_number(Some(max));
    if n.is_nan() || lo.is_nan() || hi.is_nan() {
        return false;
    }
    n >= lo && n <= hi
}

fn is_true(actual: Option<&Value>) -> bool {
    match actual {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

fn is_false(actual: Option<&Value>) -> bool {
    match actual {
        Some(Value::Bool(b)) => !*b,
        Some(Value::String(s)) => s == "false",
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cond, values};
    use serde_json::json;

    #[test]
    fn eq_is_strict() {
        let v = values(json!({"amt": 5}));
        assert!(evaluate_condition(&cond("amt", "EQ", json!(5)), &v));
        assert!(!evaluate_condition(&cond("amt", "EQ", json!("5")), &v));
        assert!(evaluate_condition(&cond("amt", "NEQ", json!("5")), &v));
    }

    #[test]
    fn eq_against_missing_field_only_matches_absent_value() {
        let v = values(json!({}));
        assert!(!evaluate_condition(&cond("x", "EQ", json!(null)), &v));
        assert!(evaluate_condition(&Condition::new("x", "EQ"), &v));
    }

    #[test]
    fn contains_is_case_insensitive_and_string_only() {
        let v = values(json!({"name": "Hello World", "n": 123}));
        assert!(evaluate_condition(&cond("name", "CT", json!("WORLD")), &v));
        assert!(evaluate_condition(&cond("name", "SW", json!("hello")), &v));
        assert!(evaluate_condition(&cond("name", "EW", json!("World")), &v));
        assert!(!evaluate_condition(&cond("n", "CT", json!("2")), &v));
        assert!(evaluate_condition(&cond("n", "NCT", json!("2")), &v));
        assert!(!evaluate_condition(&cond("name", "CT", json!(1)), &v));
    }

    #[test]
    fn in_accepts_arrays_and_comma_lists() {
        let v = values(json!({"s": "B", "n": 5}));
        assert!(evaluate_condition(&cond("s", "IN", json!(["A", "B"])), &v));
        assert!(evaluate_condition(&cond("s", "IN", json!("A, B ,C")), &v));
        assert!(evaluate_condition(&cond("n", "IN", json!("4,5,6")), &v));
        assert!(!evaluate_condition(&cond("n", "IN", json!(["5"])), &v));
        assert!(!evaluate_condition(&cond("s", "IN", json!(7)), &v));
        assert!(evaluate_condition(&cond("s", "NIN", json!(["A"])), &v));
    }

    #[test]
    fn in_with_missing_value_compares_against_undefined() {
        let v = values(json!({}));
        assert!(evaluate_condition(&cond("gone", "IN", json!("undefined,x")), &v));
    }

    #[test]
    fn numeric_comparisons_cast_operands() {
        let v = values(json!({"x": "10", "y": 3}));
        assert!(evaluate_condition(&cond("x", "GT", json!(5)), &v));
        assert!(evaluate_condition(&cond("y", "LTE", json!("3")), &v));
        assert!(evaluate_condition(&cond("y", "GTE", json!(3)), &v));
        assert!(!evaluate_condition(&cond("y", "LT", json!(3)), &v));
    }

    #[test]
    fn non_numeric_operand_reads_as_zero() {
        let v = values(json!({"x": "abc"}));
        assert!(!evaluate_condition(&cond("x", "GT", json!(5)), &v));
        assert!(evaluate_condition(&cond("x", "LT", json!(5)), &v));
        assert!(evaluate_condition(&cond("x", "GTE", json!(0)), &v));
        assert!(!evaluate_condition(&cond("x", "LTE", json!(-1)), &v));
    }

    #[test]
    fn null_checks() {
        let v = values(json!({"a": null, "b": "", "c": 0}));
        assert!(evaluate_condition(&Condition::new("a", "ISN"), &v));
        assert!(evaluate_condition(&Condition::new("b", "ISN"), &v));
        assert!(evaluate_condition(&Condition::new("missing", "ISN"), &v));
        assert!(evaluate_condition(&Condition::new("c", "ISNN"), &v));
    }

    #[test]
    fn truthiness_operators() {
        let v = values(json!({"t1": true, "t2": "true", "t3": 1, "f1": false, "f2": "false", "f3": 0, "s": "yes"}));
        for id in ["t1", "t2", "t3"] {
            assert!(evaluate_condition(&Condition::new(id, "IST"), &v), "{id}");
            assert!(!evaluate_condition(&Condition::new(id, "ISF"), &v), "{id}");
        }
        for id in ["f1", "f2", "f3"] {
            assert!(evaluate_condition(&Condition::new(id, "ISF"), &v), "{id}");
        }
        assert!(!evaluate_condition(&Condition::new("s", "IST"), &v));
        assert!(!evaluate_condition(&Condition::new("s", "ISF"), &v));
    }

    #[test]
    fn between_is_inclusive_and_strict_about_shape() {
        let v = values(json!({"x": 10, "bad": "abc"}));
        assert!(evaluate_condition(&cond("x", "BETWEEN", json!([10, 20])), &v));
        assert!(evaluate_condition(&cond("x", "BETWEEN", json!([0, 10])), &v));
        assert!(!evaluate_condition(&cond("x", "BETWEEN", json!([11, 20])), &v));
        assert!(!evaluate_condition(&cond("x", "BETWEEN", json!([1, 2, 3])), &v));
        assert!(!evaluate_condition(&cond("x", "BETWEEN", json!("1,20")), &v));
        assert!(!evaluate_condition(&cond("x", "BETWEEN", json!(["a", 20])), &v));
        assert!(!evaluate_condition(&cond("bad", "BETWEEN", json!([0, 20])), &v));
    }

    #[test]
    fn changed_is_never_satisfied() {
        let v = values(json!({"x": 1}));
        assert!(!evaluate_condition(&Condition::new("x", "CHANGED"), &v));
    }

    #[test]
    fn unknown_operator_fails_open() {
        let v = values(json!({"x": 1}));
        assert!(evaluate_condition(&cond("x", "FOO", json!(2)), &v));
        assert!(evaluate_condition(&cond("x", "eq", json!(2)), &v));
    }

    #[test]
    fn expression_combinators() {
        let v = values(json!({"a": 1, "b": 2}));
        let hit = cond("a", "EQ", json!(1));
        let miss = cond("b", "EQ", json!(1));

        assert!(evaluate_condition_expression(&ConditionExpression::default(), &v));
        assert!(evaluate_condition_expression(
            &ConditionExpression::any(vec![miss.clone(), hit.clone()]),
            &v
        ));
        assert!(!evaluate_condition_expression(
            &ConditionExpression::all(vec![miss.clone(), hit.clone()]),
            &v
        ));

        let implicit_and = ConditionExpression {
            logical_operator: None,
            conditions: vec![hit.clone(), miss.clone()],
        };
        assert!(!evaluate_condition_expression(&implicit_and, &v));

        let unrecognized = ConditionExpression {
            logical_operator: Some(LogicalOperator::Unrecognized),
            conditions: vec![hit, miss],
        };
        assert!(!evaluate_condition_expression(&unrecognized, &v));
    }
}
