//! Typed form-definition model.
//!
//! Documents use the builder's PascalCase keys (`MenuID`, `Fields`, `ConditionExpression`)
//! except for a handful of field properties that were renamed to lowercase over time
//! (`label`, `type`, `required`). Both spellings are read; the lowercase one is written.

use crate::error::ModelError;
use formguard_types::compat::has_value;
use formguard_types::vocab;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Current values keyed by field id. A missing key means "no value at all", which is
/// distinct from an explicit JSON `null`.
pub type FieldValues = BTreeMap<String, Value>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(rename = "MenuID", default)]
    pub menu_id: String,
    #[serde(rename = "FormWidth", default)]
    pub form_width: String,
    #[serde(rename = "Layout", default)]
    pub layout: String,
    #[serde(rename = "Label", default)]
    pub label: String,

    /// Display and evaluation order.
    #[serde(rename = "Fields")]
    pub fields: Vec<FormField>,

    #[serde(rename = "Actions", default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<FormAction>,

    /// Form-level rules, evaluated independently of any single field.
    #[serde(rename = "Validations", default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<ValidationRule>,
}

impl FormDefinition {
    pub fn from_json_str(text: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(|e| ModelError::Shape(e.to_string()))
    }

    /// Every field in the tree, depth-first, parents before their children.
    pub fn walk_fields(&self) -> FieldWalk<'_> {
        FieldWalk::new(&self.fields)
    }

    pub fn find_field(&self, id: &str) -> Option<&FormField> {
        self.walk_fields().find(|f| f.id == id)
    }
}

/// Pre-order iterator over a field tree.
pub struct FieldWalk<'a> {
    stack: Vec<&'a FormField>,
}

impl<'a> FieldWalk<'a> {
    fn new(roots: &'a [FormField]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for FieldWalk<'a> {
    type Item = &'a FormField;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.stack.pop()?;
        self.stack.extend(field.child_fields().iter().rev());
        Some(field)
    }
}

/// A single form control: shared base properties plus a per-type payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FieldRecord", into = "FieldRecord")]
pub struct FormField {
    pub id: String,
    pub label: String,
    /// Raw component type code (`TEXT`, `GRIDLKP`, ...). Empty when the document has none.
    pub field_type: String,
    pub required: bool,
    /// Author-time default value.
    pub value: Option<Value>,
    pub validations: Vec<ValidationRule>,
    pub enabled_when: Option<ConditionExpression>,
    pub kind: FieldKind,
    /// Properties this model does not interpret (Width, Spacing, DataField, ...).
    pub extra: Map<String, Value>,
}

impl FormField {
    pub fn new(id: &str, label: &str, field_type: &str) -> Self {
        let mut field = FormField {
            id: id.to_string(),
            label: label.to_string(),
            field_type: field_type.to_string(),
            ..FormField::default()
        };
        field.kind = FieldKind::empty_for(field_type);
        field
    }

    pub fn child_fields(&self) -> &[FormField] {
        match &self.kind {
            FieldKind::Group(group) => &group.child_fields,
            _ => &[],
        }
    }

    /// Layout width (`"200px"`, `"50%"`). Kept untyped since documents mix strings and numbers.
    pub fn width(&self) -> Option<&str> {
        self.extra.get("Width").and_then(Value::as_str)
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, FieldKind::Group(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldKind {
    /// GRIDLKP / LSTLKP
    Lookup(LookupField),
    /// SELECT / RADIOGRP
    Choice(ChoiceField),
    /// GROUP
    Group(GroupField),
    /// DATEPICKER
    Date,
    /// CHECKBOX
    Checkbox,
    /// Anything else, including custom component types.
    #[default]
    Other,
}

impl FieldKind {
    fn empty_for(field_type: &str) -> Self {
        match field_type {
            t if vocab::is_lookup_type(t) => FieldKind::Lookup(LookupField::default()),
            t if vocab::is_choice_type(t) => FieldKind::Choice(ChoiceField::default()),
            vocab::TYPE_GROUP => FieldKind::Group(GroupField::default()),
            vocab::TYPE_DATEPICKER => FieldKind::Date,
            vocab::TYPE_CHECKBOX => FieldKind::Checkbox,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupField {
    pub key_column: Option<String>,
    pub load_data_info: Option<LoadDataInfo>,
    pub item_info: Option<ItemInfo>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChoiceField {
    /// Option key -> display label, in document order where the JSON backend keeps it.
    pub option_values: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupField {
    /// Owned exclusively by the group; nesting depth is unbounded.
    pub child_fields: Vec<FormField>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadDataInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_model: Option<String>,
    #[serde(default)]
    pub columns_definition: Vec<ColumnDefinition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_description: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormAction {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Label", default)]
    pub label: String,
    #[serde(rename = "MethodToInvoke", default)]
    pub method_to_invoke: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(
        rename = "Type",
        default,
        deserialize_with = "rule_type_tag",
        skip_serializing_if = "RuleType::is_unrecognized"
    )]
    pub rule_type: RuleType,
    /// Absent means the rule is always satisfied.
    #[serde(
        rename = "ConditionExpression",
        alias = "CondExpression",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub condition_expression: Option<ConditionExpression>,
}

/// `ERROR` blocks validity, `WARNING` does not. Any other tag is kept as
/// `Unrecognized` and reported like a warning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleType {
    Error,
    Warning,
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl RuleType {
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, RuleType::Unrecognized)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionExpression {
    /// Omitted means AND.
    #[serde(
        rename = "LogicalOperator",
        default,
        deserialize_with = "logical_operator_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub logical_operator: Option<LogicalOperator>,
    #[serde(rename = "Conditions", default)]
    pub conditions: Vec<Condition>,
}

impl ConditionExpression {
    pub fn all(conditions: Vec<Condition>) -> Self {
        Self {
            logical_operator: Some(LogicalOperator::And),
            conditions,
        }
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Self {
            logical_operator: Some(LogicalOperator::Or),
            conditions,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    And,
    Or,
    #[serde(other)]
    Unrecognized,
}

/// A single comparison against the current value of `right_field`.
///
/// Despite its name, `RightField` is the value-bearing operand: the field id whose
/// current value is tested. `Value` is the literal it is compared with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(
        rename = "RightField",
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub right_field: Option<String>,
    /// Kept as written; a non-string code never matches the vocabulary.
    #[serde(rename = "Operator", default, deserialize_with = "operator_code")]
    pub operator: String,
    #[serde(
        rename = "Value",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(
        rename = "ValueType",
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_type: Option<String>,
}

impl Condition {
    pub fn new(right_field: &str, operator: &str) -> Self {
        Self {
            right_field: Some(right_field.to_string()),
            operator: operator.to_string(),
            value: None,
            value_type: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// Parse a JSON object of field values.
pub fn parse_field_values(text: &str) -> Result<FieldValues, ModelError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Null => Err(ModelError::ValuesNotObject("null")),
        Value::Bool(_) => Err(ModelError::ValuesNotObject("a boolean")),
        Value::Number(_) => Err(ModelError::ValuesNotObject("a number")),
        Value::String(_) => Err(ModelError::ValuesNotObject("a string")),
        Value::Array(_) => Err(ModelError::ValuesNotObject("an array")),
    }
}

/// Keeps `"Value": null` distinct from an absent `Value`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Scalar text slot. Numbers and booleans keep their JSON spelling; anything else
/// is treated as absent.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn operator_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    loose_text(deserializer).map(Option::unwrap_or_default)
}

/// Any tag other than the strings `ERROR` and `WARNING` is `Unrecognized`.
fn rule_type_tag<'de, D>(deserializer: D) -> Result<RuleType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        tag @ Value::String(_) => serde_json::from_value(tag).unwrap_or_default(),
        _ => RuleType::Unrecognized,
    })
}

fn logical_operator_tag<'de, D>(deserializer: D) -> Result<Option<LogicalOperator>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        tag @ Value::String(_) => {
            Some(serde_json::from_value(tag).unwrap_or(LogicalOperator::Unrecognized))
        }
        _ => Some(LogicalOperator::Unrecognized),
    })
}

/// Older documents stored `EnabledWhen` as JSON text rather than an object.
fn expression_or_text<'de, D>(deserializer: D) -> Result<Option<ConditionExpression>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => serde_json::from_str(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Wire shape of a field, carrying both property spellings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct FieldRecord {
    #[serde(rename = "Id", default)]
    id: String,
    #[serde(
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    label: Option<String>,
    #[serde(rename = "Label", default, deserialize_with = "loose_text", skip_serializing)]
    legacy_label: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    field_type: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "loose_text", skip_serializing)]
    legacy_type: Option<String>,
    /// Any truthy value marks the field required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required: Option<Value>,
    #[serde(rename = "Required", default, skip_serializing)]
    legacy_required: Option<Value>,
    #[serde(
        rename = "Value",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    value: Option<Value>,
    #[serde(rename = "Validations", default, skip_serializing_if = "Vec::is_empty")]
    validations: Vec<ValidationRule>,
    #[serde(
        rename = "EnabledWhen",
        default,
        deserialize_with = "expression_or_text",
        skip_serializing_if = "Option::is_none"
    )]
    enabled_when: Option<ConditionExpression>,
    #[serde(rename = "KeyColumn", default, skip_serializing_if = "Option::is_none")]
    key_column: Option<String>,
    #[serde(rename = "LoadDataInfo", default, skip_serializing_if = "Option::is_none")]
    load_data_info: Option<LoadDataInfo>,
    #[serde(rename = "ItemInfo", default, skip_serializing_if = "Option::is_none")]
    item_info: Option<ItemInfo>,
    #[serde(rename = "OptionValues", default, skip_serializing_if = "Option::is_none")]
    option_values: Option<Map<String, Value>>,
    #[serde(rename = "ChildFields", default, skip_serializing_if = "Option::is_none")]
    child_fields: Option<Vec<FormField>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn first_non_empty(current: Option<String>, legacy: Option<String>) -> String {
    current
        .filter(|s| !s.is_empty())
        .or(legacy)
        .unwrap_or_default()
}

/// Park a payload property on `extra` when the field's type does not interpret it.
fn park<T: Serialize>(extra: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(v) = value.and_then(|v| serde_json::to_value(v).ok()) {
        extra.insert(key.to_string(), v);
    }
}

impl From<FieldRecord> for FormField {
    fn from(raw: FieldRecord) -> Self {
        let field_type = first_non_empty(raw.field_type, raw.legacy_type);
        let mut extra = raw.extra;

        let kind = match FieldKind::empty_for(&field_type) {
            FieldKind::Lookup(_) => {
                park(&mut extra, "OptionValues", raw.option_values);
                park(&mut extra, "ChildFields", raw.child_fields);
                FieldKind::Lookup(LookupField {
                    key_column: raw.key_column,
                    load_data_info: raw.load_data_info,
                    item_info: raw.item_info,
                })
            }
            FieldKind::Choice(_) => {
                park(&mut extra, "KeyColumn", raw.key_column);
                park(&mut extra, "LoadDataInfo", raw.load_data_info);
                park(&mut extra, "ItemInfo", raw.item_info);
                park(&mut extra, "ChildFields", raw.child_fields);
                FieldKind::Choice(ChoiceField {
                    option_values: raw.option_values,
                })
            }
            FieldKind::Group(_) => {
                park(&mut extra, "KeyColumn", raw.key_column);
                park(&mut extra, "LoadDataInfo", raw.load_data_info);
                park(&mut extra, "ItemInfo", raw.item_info);
                park(&mut extra, "OptionValues", raw.option_values);
                FieldKind::Group(GroupField {
                    child_fields: raw.child_fields.unwrap_or_default(),
                })
            }
            other => {
                park(&mut extra, "KeyColumn", raw.key_column);
                park(&mut extra, "LoadDataInfo", raw.load_data_info);
                park(&mut extra, "ItemInfo", raw.item_info);
                park(&mut extra, "OptionValues", raw.option_values);
                park(&mut extra, "ChildFields", raw.child_fields);
                other
            }
        };

        FormField {
            id: raw.id,
            label: first_non_empty(raw.label, raw.legacy_label),
            field_type,
            required: has_value(raw.required.as_ref()) || has_value(raw.legacy_required.as_ref()),
            value: raw.value,
            validations: raw.validations,
            enabled_when: raw.enabled_when,
            kind,
            extra,
        }
    }
}

impl From<FormField> for FieldRecord {
    fn from(field: FormField) -> Self {
        let mut record = FieldRecord {
            id: field.id,
            label: Some(field.label),
            field_type: Some(field.field_type).filter(|t| !t.is_empty()),
            required: field.required.then_some(Value::Bool(true)),
            value: field.value,
            validations: field.validations,
            enabled_when: field.enabled_when,
            extra: field.extra,
            ..FieldRecord::default()
        };

        match field.kind {
            FieldKind::Lookup(lookup) => {
                record.key_column = lookup.key_column;
                record.load_data_info = lookup.load_data_info;
                record.item_info = lookup.item_info;
            }
            FieldKind::Choice(choice) => record.option_values = choice.option_values,
            FieldKind::Group(group) => record.child_fields = Some(group.child_fields),
            FieldKind::Date | FieldKind::Checkbox | FieldKind::Other => {}
        }

        record
    }
}
