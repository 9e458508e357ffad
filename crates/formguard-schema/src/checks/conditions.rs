//! Validation rules and condition expressions, shared by form-level rules,
//! field rules, and `EnabledWhen`.

use super::utils::describe;
use formguard_types::compat::has_value;
use formguard_types::{DocPath, SchemaFinding, ids, vocab};
use serde_json::Value;
use std::borrow::Cow;

/// Check `{parent}.Validations[i]` entries.
pub fn check_rules(rules: &[Value], parent: &DocPath, out: &mut Vec<SchemaFinding>) {
    let base = parent.key("Validations");
    for (index, rule) in rules.iter().enumerate() {
        let path = base.index(index);

        if !has_value(rule.get("Id")) {
            out.push(SchemaFinding::error(
                path.key("Id"),
                "Validation Id is required",
                ids::CODE_MISSING_VALIDATION_ID,
            ));
        }

        let rule_type = rule.get("Type").and_then(Value::as_str);
        if !rule_type.is_some_and(|t| vocab::RULE_TYPES.contains(&t)) {
            out.push(SchemaFinding::error(
                path.key("Type"),
                "Validation Type must be \"ERROR\" or \"WARNING\"",
                ids::CODE_INVALID_VALIDATION_TYPE,
            ));
        }

        // The short key wins when both spellings are set.
        let expr = ["CondExpression", "ConditionExpression"]
            .into_iter()
            .filter_map(|key| rule.get(key))
            .find(|v| has_value(Some(*v)));
        if let Some(expr) = expr {
            check_expression(expr, &path.key("ConditionExpression"), out);
        }
    }
}

/// Check a condition expression. A missing `Conditions` array stops the check.
pub fn check_expression(expr: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    let expr = expression_body(expr);

    let Some(conditions) = expr.get("Conditions").and_then(Value::as_array) else {
        out.push(SchemaFinding::error(
            path.key("Conditions"),
            "Conditions array is required",
            ids::CODE_MISSING_CONDITIONS,
        ));
        return;
    };

    let logical = expr.get("LogicalOperator");
    if has_value(logical)
        && !logical
            .and_then(Value::as_str)
            .is_some_and(|op| vocab::LOGICAL_OPERATORS.contains(&op))
    {
        out.push(SchemaFinding::error(
            path.key("LogicalOperator"),
            "LogicalOperator must be \"AND\" or \"OR\"",
            ids::CODE_INVALID_LOGICAL_OPERATOR,
        ));
    }

    let base = path.key("Conditions");
    for (index, condition) in conditions.iter().enumerate() {
        check_condition(condition, &base.index(index), out);
    }
}

fn check_condition(condition: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    if !has_value(condition.get("RightField")) {
        out.push(SchemaFinding::error(
            path.key("RightField"),
            "RightField is required",
            ids::CODE_MISSING_RIGHT_FIELD,
        ));
    }

    match condition.get("Operator").filter(|v| has_value(Some(*v))) {
        None => out.push(SchemaFinding::error(
            path.key("Operator"),
            "Operator is required",
            ids::CODE_MISSING_OPERATOR,
        )),
        Some(op) if !op.as_str().is_some_and(vocab::is_standard_operator) => {
            out.push(SchemaFinding::warning(
                path.key("Operator"),
                format!("Operator \"{}\" is not a standard operator", describe(op)),
                ids::CODE_NON_STANDARD_OPERATOR,
            ))
        }
        Some(_) => {}
    }

    if let Some(value_type) = condition.get("ValueType").filter(|v| has_value(Some(*v))) {
        if !value_type.as_str().is_some_and(vocab::is_standard_value_type) {
            out.push(SchemaFinding::warning(
                path.key("ValueType"),
                format!("ValueType \"{}\" is not a standard type", describe(value_type)),
                ids::CODE_NON_STANDARD_VALUE_TYPE,
            ));
        }
    }
}

/// Older documents store expressions as JSON text.
fn expression_body(expr: &Value) -> Cow<'_, Value> {
    match expr {
        Value::String(text) => serde_json::from_str(text)
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(expr)),
        _ => Cow::Borrowed(expr),
    }
}
