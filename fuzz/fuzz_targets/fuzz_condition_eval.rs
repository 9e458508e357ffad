//! Fuzz target for condition evaluation.
//!
//! Goal: every operator (known or not) over every pair of JSON values returns a
//! boolean without panicking.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_condition_eval
//! ```

#![no_main]

use arbitrary::Arbitrary;
use formguard_domain::FieldValues;
use formguard_domain::model::{Condition, ConditionExpression};
use libfuzzer_sys::fuzz_target;
use serde_json::{Value, json};

#[derive(Arbitrary, Debug)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
    Pair(i32, i32),
}

impl FuzzValue {
    fn into_json(self) -> Value {
        match self {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Bool(b),
            FuzzValue::Int(n) => json!(n),
            // Non-finite floats become null in serde_json.
            FuzzValue::Float(f) => json!(f),
            FuzzValue::Text(s) => Value::String(s),
            FuzzValue::List(items) => json!(items),
            FuzzValue::Pair(lo, hi) => json!([lo, hi]),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct ConditionInput {
    operator: String,
    actual: Option<FuzzValue>,
    expected: Option<FuzzValue>,
    use_or: bool,
}

fuzz_target!(|inputs: Vec<ConditionInput>| {
    if inputs.len() > 16 {
        return;
    }

    let mut values = FieldValues::new();
    let mut conditions = Vec::new();
    for (index, input) in inputs.into_iter().enumerate() {
        let field = format!("f{index}");
        if let Some(actual) = input.actual {
            values.insert(field.clone(), actual.into_json());
        }
        let mut condition = Condition::new(&field, &input.operator);
        if let Some(expected) = input.expected {
            condition = condition.with_value(expected.into_json());
        }
        let _ = formguard_domain::evaluate_condition(&condition, &values);
        conditions.push((condition, input.use_or));
    }

    let use_or = conditions.first().is_some_and(|(_, or)| *or);
    let conditions: Vec<Condition> = conditions.into_iter().map(|(c, _)| c).collect();
    let expression = if use_or {
        ConditionExpression::any(conditions)
    } else {
        ConditionExpression::all(conditions)
    };
    let _ = formguard_domain::evaluate_condition_expression(&expression, &values);
});
