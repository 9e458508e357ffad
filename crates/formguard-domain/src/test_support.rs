use crate::model::{Condition, ConditionExpression, FieldValues, FormDefinition, RuleType, ValidationRule};
use serde_json::Value;

pub fn cond(field: &str, operator: &str, value: Value) -> Condition {
    Condition::new(field, operator).with_value(value)
}

pub fn values(v: Value) -> FieldValues {
    match v {
        Value::Object(map) => map.into_iter().collect(),
        other => panic!("test values must be an object, got {other}"),
    }
}

/// Build a form from a partial document; missing header keys get defaults.
pub fn form(v: Value) -> FormDefinition {
    FormDefinition::from_value(v).expect("test form should deserialize")
}

pub fn rule(id: &str, rule_type: RuleType, expr: Option<ConditionExpression>) -> ValidationRule {
    ValidationRule {
        id: id.to_string(),
        rule_type,
        condition_expression: expr,
    }
}
