use super::utils::{FORM_WIDTH, MENU_ID};
use formguard_types::compat::{has_value, str_prop};
use formguard_types::{DocPath, SchemaFinding, ids, vocab};
use serde_json::Value;

const REQUIRED_KEYS: [&str; 4] = ["MenuID", "FormWidth", "Layout", "Label"];

pub fn run(doc: &Value, out: &mut Vec<SchemaFinding>) {
    let root = DocPath::root();

    for key in REQUIRED_KEYS {
        if !has_value(doc.get(key)) {
            out.push(SchemaFinding::error(
                root.key(key),
                format!("Required field '{key}' is missing"),
                ids::CODE_MISSING_REQUIRED_FIELD,
            ));
        }
    }

    if str_prop(doc, "MenuID").is_some_and(|id| !MENU_ID.is_match(id)) {
        out.push(SchemaFinding::error(
            root.key("MenuID"),
            "MenuID should be uppercase alphanumeric, max 10 characters",
            ids::CODE_INVALID_MENU_ID,
        ));
    }

    if str_prop(doc, "FormWidth").is_some_and(|w| !FORM_WIDTH.is_match(w)) {
        out.push(SchemaFinding::error(
            root.key("FormWidth"),
            "FormWidth should be in format \"XXXpx\" or \"100%\"",
            ids::CODE_INVALID_FORM_WIDTH,
        ));
    }

    if let Some(layout) = str_prop(doc, "Layout").filter(|l| !vocab::is_standard_layout(l)) {
        out.push(SchemaFinding::warning(
            root.key("Layout"),
            format!("Layout \"{layout}\" is not a standard layout type"),
            ids::CODE_NON_STANDARD_LAYOUT,
        ));
    }

    if !doc.get("Fields").is_some_and(Value::is_array) {
        out.push(SchemaFinding::error(
            root.key("Fields"),
            "Fields array is required",
            ids::CODE_MISSING_FIELDS_ARRAY,
        ));
    }
}
