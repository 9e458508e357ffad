use formguard_types::{DocPath, SchemaFinding};
use serde_json::Value;

mod actions;
mod conditions;
mod field_types;
mod fields;
mod root;
mod utils;


/// Run every structural check in document order: header, fields, actions, then
/// form-level rules.
pub fn run_all(doc: &Value, out: &mut Vec<SchemaFinding>) {
    root::run(doc, out);
    fields::run(doc, out);
    actions::run(doc, out);

    if let Some(rules) = doc.get("Validations").and_then(Value::as_array) {
        conditions::check_rules(rules, &DocPath::root(), out);
    }
}
