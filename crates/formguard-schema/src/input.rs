use serde_json::Value;
use std::borrow::Cow;

/// What the structural validator accepts: raw text or a parsed value.
#[derive(Clone, Copy, Debug)]
pub enum SchemaInput<'a> {
    Text(&'a str),
    Value(&'a Value),
}

impl<'a> SchemaInput<'a> {
    /// Resolve to a document. A JSON string value is treated as document text.
    pub(crate) fn parse(self) -> Option<Cow<'a, Value>> {
        match self {
            SchemaInput::Text(text) => serde_json::from_str(text).ok().map(Cow::Owned),
            SchemaInput::Value(Value::String(text)) => {
                serde_json::from_str(text).ok().map(Cow::Owned)
            }
            SchemaInput::Value(value) => Some(Cow::Borrowed(value)),
        }
    }
}

impl<'a> From<&'a str> for SchemaInput<'a> {
    fn from(text: &'a str) -> Self {
        SchemaInput::Text(text)
    }
}

impl<'a> From<&'a String> for SchemaInput<'a> {
    fn from(text: &'a String) -> Self {
        SchemaInput::Text(text)
    }
}

impl<'a> From<&'a Value> for SchemaInput<'a> {
    fn from(value: &'a Value) -> Self {
        SchemaInput::Value(value)
    }
}
