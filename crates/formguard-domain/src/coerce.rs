//! Loose value coercions used by condition operators.
//!
//! `None` stands for a field that has no value at all, which is not the same
//! thing as an explicit JSON `null`.

use serde_json::Value;

/// Numeric cast of a loosely typed value. Returns `NaN` when the value does not
/// read as a number.
pub(crate) fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_number(s),
        Some(Value::Array(_)) => parse_number(&display_string(value)),
        Some(Value::Object(_)) => f64::NAN,
    }
}

fn parse_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }

    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match t.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&t[2..], radix);
    }

    // `f64::from_str` also accepts `inf`, `nan`, and friends; only plain
    // decimal notation counts here.
    if !t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Equality without coercion: `5` equals `5.0`, but never `"5"`.
pub(crate) fn strict_equals(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => values_equal(a, b),
        _ => false,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)))
        }
        _ => a == b,
    }
}

/// String form used for comma-list membership (`"undefined"`, `"null"`, `"5"`, `"a,b"`).
pub(crate) fn display_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_string(n),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

fn number_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // f64 Display prints `5` for 5.0 and `5.5` for 5.5.
    n.as_f64().map(|f| f.to_string()).unwrap_or_default()
}

/// Absent, `null`, and `""` are empty. `0`, `false`, and `[]` are not.
pub(crate) fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn num(v: Value) -> f64 {
        to_number(Some(&v))
    }

    #[test]
    fn numeric_cast_of_scalars() {
        assert_eq!(num(json!(null)), 0.0);
        assert_eq!(num(json!(true)), 1.0);
        assert_eq!(num(json!(false)), 0.0);
        assert_eq!(num(json!(7)), 7.0);
        assert!(to_number(None).is_nan());
    }

    #[test]
    fn numeric_cast_of_strings() {
        assert_eq!(num(json!("  42 ")), 42.0);
        assert_eq!(num(json!("")), 0.0);
        assert_eq!(num(json!("   ")), 0.0);
        assert_eq!(num(json!("1.5e2")), 150.0);
        assert_eq!(num(json!(".5")), 0.5);
        assert_eq!(num(json!("-3")), -3.0);
        assert_eq!(num(json!("0x1F")), 31.0);
        assert_eq!(num(json!("0b101")), 5.0);
        assert_eq!(num(json!("0o17")), 15.0);
        assert_eq!(num(json!("Infinity")), f64::INFINITY);
        assert!(num(json!("abc")).is_nan());
        assert!(num(json!("inf")).is_nan());
        assert!(num(json!("NaN")).is_nan());
        assert!(num(json!("1_000")).is_nan());
        assert!(num(json!("0x")).is_nan());
    }

    #[test]
    fn numeric_cast_of_containers() {
        assert_eq!(num(json!([])), 0.0);
        assert_eq!(num(json!([9])), 9.0);
        assert_eq!(num(json!(["9"])), 9.0);
        assert!(num(json!([1, 2])).is_nan());
        assert!(num(json!({})).is_nan());
    }

    #[test]
    fn strict_equality_does_not_coerce() {
        assert!(strict_equals(Some(&json!(5)), Some(&json!(5.0))));
        assert!(!strict_equals(Some(&json!(5)), Some(&json!("5"))));
        assert!(!strict_equals(None, Some(&json!(null))));
        assert!(strict_equals(None, None));
        assert!(strict_equals(Some(&json!([1, {"a": 2}])), Some(&json!([1.0, {"a": 2}]))));
    }

    #[test]
    fn display_strings() {
        assert_eq!(display_string(None), "undefined");
        assert_eq!(display_string(Some(&json!(null))), "null");
        assert_eq!(display_string(Some(&json!(5))), "5");
        assert_eq!(display_string(Some(&json!(5.0))), "5");
        assert_eq!(display_string(Some(&json!(5.5))), "5.5");
        assert_eq!(display_string(Some(&json!(["a", null, 1]))), "a,,1");
    }

    #[test]
    fn emptiness() {
        assert!(is_empty_value(None));
        assert!(is_empty_value(Some(&json!(null))));
        assert!(is_empty_value(Some(&json!(""))));
        assert!(!is_empty_value(Some(&json!(0))));
        assert!(!is_empty_value(Some(&json!(false))));
        assert!(!is_empty_value(Some(&json!([]))));
    }
}
