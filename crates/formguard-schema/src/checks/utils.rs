use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("structural patterns are static and valid")
}

pub static MENU_ID: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Z0-9]{1,10}$"));
pub static FORM_WIDTH: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(100%|\d+px)$"));
pub static FIELD_ID: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z][a-zA-Z0-9_]*$"));
pub static WIDTH: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(\d+(%|px)?|\d+)$"));
pub static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d{4}-\d{2}-\d{2}$"));

/// Render a raw value for a message: strings bare, everything else as JSON.
pub fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
