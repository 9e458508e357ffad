use formguard_types::compat::has_value;
use formguard_types::{DocPath, SchemaFinding, ids};
use serde_json::Value;

const REQUIRED: [(&str, &str, &str); 3] = [
    ("ID", "Action ID is required", ids::CODE_MISSING_ACTION_ID),
    ("Label", "Action Label is required", ids::CODE_MISSING_ACTION_LABEL),
    (
        "MethodToInvoke",
        "MethodToInvoke is required",
        ids::CODE_MISSING_METHOD_TO_INVOKE,
    ),
];

pub fn run(doc: &Value, out: &mut Vec<SchemaFinding>) {
    let Some(actions) = doc.get("Actions").and_then(Value::as_array) else {
        return;
    };

    let base = DocPath::new("Actions");
    for (index, action) in actions.iter().enumerate() {
        let path = base.index(index);
        for (key, message, code) in REQUIRED {
            if !has_value(action.get(key)) {
                out.push(SchemaFinding::error(path.key(key), message, code));
            }
        }
    }
}
