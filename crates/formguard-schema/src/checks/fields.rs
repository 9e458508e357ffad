use super::utils::{FIELD_ID, WIDTH, describe};
use super::{conditions, field_types};
use formguard_types::compat::{field_prop, has_value, str_prop};
use formguard_types::{DocPath, SchemaFinding, ids, vocab};
use serde_json::Value;

pub fn run(doc: &Value, out: &mut Vec<SchemaFinding>) {
    if let Some(fields) = doc.get("Fields").and_then(Value::as_array) {
        check_fields(fields, &DocPath::new("Fields"), out);
    }
}

/// Validate a list of fields rooted at `parent` (`Fields` or `...ChildFields`).
pub(super) fn check_fields(fields: &[Value], parent: &DocPath, out: &mut Vec<SchemaFinding>) {
    for (index, field) in fields.iter().enumerate() {
        check_field(field, &parent.index(index), out);
    }
}

fn check_field(field: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    let field_type = field_prop(field, "type").filter(|t| has_value(Some(*t)));

    if !has_value(field.get("Id")) {
        out.push(missing_property(path, "Id"));
    }
    if field_type.is_none() {
        out.push(missing_property(path, "type"));
    }

    if str_prop(field, "Id").is_some_and(|id| !FIELD_ID.is_match(id)) {
        out.push(SchemaFinding::error(
            path.key("Id"),
            "Field Id should start with letter and contain only alphanumeric characters and underscores",
            ids::CODE_INVALID_FIELD_ID,
        ));
    }

    if let Some(raw_type) = field_type {
        let type_code = raw_type.as_str();
        if !type_code.is_some_and(vocab::is_standard_component_type) {
            out.push(SchemaFinding::warning(
                path.key("type"),
                format!("Field type \"{}\" is not a standard type", describe(raw_type)),
                ids::CODE_NON_STANDARD_FIELD_TYPE,
            ));
        }
        if let Some(code) = type_code {
            field_types::check(field, code, path, out);
        }
    }

    if str_prop(field, "Width").is_some_and(|w| !WIDTH.is_match(w)) {
        out.push(SchemaFinding::error(
            path.key("Width"),
            "Width should be numeric or with px/% suffix",
            ids::CODE_INVALID_WIDTH_FORMAT,
        ));
    }

    if let Some(expr) = field.get("EnabledWhen").filter(|v| has_value(Some(*v))) {
        conditions::check_expression(expr, &path.key("EnabledWhen"), out);
    }

    if let Some(rules) = field.get("Validations").and_then(Value::as_array) {
        conditions::check_rules(rules, path, out);
    }

    if field_type.and_then(Value::as_str) == Some(vocab::TYPE_GROUP) {
        match field.get("ChildFields") {
            Some(Value::Array(children)) => check_fields(children, &path.key("ChildFields"), out),
            children if has_value(children) => out.push(SchemaFinding::error(
                path.key("ChildFields"),
                "ChildFields should be an array for GROUP type",
                ids::CODE_INVALID_CHILD_FIELDS,
            )),
            _ => {}
        }
    }
}

fn missing_property(path: &DocPath, prop: &str) -> SchemaFinding {
    SchemaFinding::error(
        path.key(prop),
        format!("Required property '{prop}' is missing"),
        ids::CODE_MISSING_REQUIRED_PROPERTY,
    )
}
