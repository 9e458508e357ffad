//! Shared vocabularies.
//!
//! The evaluator, both structural validators, and anything that renders pickers for
//! form authors read the same tables from here. Adding an operator or component type
//! means touching exactly one place.

/// Condition operators understood by the evaluator, keyed by their wire code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Eq,
    Neq,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    In,
    NotIn,
    Gt,
    Gte,
    Lt,
    Lte,
    IsNull,
    IsNotNull,
    Changed,
    Between,
    IsTrue,
    IsFalse,
}

impl Operator {
    pub const ALL: [Operator; 18] = [
        Operator::Eq,
        Operator::Neq,
        Operator::Contains,
        Operator::NotContains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::In,
        Operator::NotIn,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::Changed,
        Operator::Between,
        Operator::IsTrue,
        Operator::IsFalse,
    ];

    /// Parse a wire code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            Operator::Eq => "EQ",
            Operator::Neq => "NEQ",
            Operator::Contains => "CT",
            Operator::NotContains => "NCT",
            Operator::StartsWith => "SW",
            Operator::EndsWith => "EW",
            Operator::In => "IN",
            Operator::NotIn => "NIN",
            Operator::Gt => "GT",
            Operator::Gte => "GTE",
            Operator::Lt => "LT",
            Operator::Lte => "LTE",
            Operator::IsNull => "ISN",
            Operator::IsNotNull => "ISNN",
            Operator::Changed => "CHANGED",
            Operator::Between => "BETWEEN",
            Operator::IsTrue => "IST",
            Operator::IsFalse => "ISF",
        }
    }

    /// Name shown in operator pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            Operator::Eq => "EQUAL",
            Operator::Neq => "NEQUAL",
            Operator::Contains => "CONTAIN",
            Operator::NotContains => "NCONTAIN",
            Operator::StartsWith => "STARTWITH",
            Operator::EndsWith => "ENDWITH",
            Operator::In => "IN",
            Operator::NotIn => "NIN",
            Operator::Gt => "GT",
            Operator::Gte => "GTE",
            Operator::Lt => "LT",
            Operator::Lte => "LTE",
            Operator::IsNull => "ISN",
            Operator::IsNotNull => "ISNN",
            Operator::Changed => "CHANGED",
            Operator::Between => "BETWEEN",
            Operator::IsTrue => "IST",
            Operator::IsFalse => "ISF",
        }
    }
}

/// Component (control) types a form field can declare.
pub const COMPONENT_TYPES: &[&str] = &[
    "GRID",
    "DIALOG",
    "TEXT",
    "GRIDLKP",
    "LSTLKP",
    "SELECT",
    "DATEPICKER",
    "GROUP",
    "CHECKBOX",
    "ACTION",
    "TEXTAREA",
    "FILEUPLOAD",
    "RADIOGRP",
];

pub const TYPE_GRIDLKP: &str = "GRIDLKP";
pub const TYPE_LSTLKP: &str = "LSTLKP";
pub const TYPE_SELECT: &str = "SELECT";
pub const TYPE_RADIOGRP: &str = "RADIOGRP";
pub const TYPE_DATEPICKER: &str = "DATEPICKER";
pub const TYPE_CHECKBOX: &str = "CHECKBOX";
pub const TYPE_GROUP: &str = "GROUP";

/// Data types for lookup columns and bound properties.
pub const FIELD_TYPES: &[&str] = &[
    "STRING",
    "DATE",
    "NUMERIC",
    "INTEGER",
    "BOOL",
    "NOTSET",
    "ANY",
    "DICTONARY",
    "LIST_RECORD",
    "SINGLE_RECORD",
    "LIST_STRING",
    "FILTER_TYPE",
    "SORT_TYPE",
    "PAGINATION_TYPE",
];

pub const LAYOUTS: &[&str] = &["PROCESS", "INQUIRY", "MAINTENANCE", "REPORT"];

/// Declared type of a condition's comparison value.
pub const VALUE_TYPES: &[&str] = &["STRING", "NUMBER", "DATE", "BOOL"];

pub const LOGICAL_AND: &str = "AND";
pub const LOGICAL_OR: &str = "OR";
pub const LOGICAL_OPERATORS: &[&str] = &[LOGICAL_AND, LOGICAL_OR];

pub const RULE_ERROR: &str = "ERROR";
pub const RULE_WARNING: &str = "WARNING";
pub const RULE_TYPES: &[&str] = &[RULE_ERROR, RULE_WARNING];

pub fn is_standard_operator(code: &str) -> bool {
    Operator::from_code(code).is_some()
}

pub fn is_standard_component_type(type_code: &str) -> bool {
    COMPONENT_TYPES.contains(&type_code)
}

pub fn is_standard_layout(layout: &str) -> bool {
    LAYOUTS.contains(&layout)
}

pub fn is_standard_value_type(value_type: &str) -> bool {
    VALUE_TYPES.contains(&value_type)
}

pub fn is_lookup_type(type_code: &str) -> bool {
    type_code == TYPE_GRIDLKP || type_code == TYPE_LSTLKP
}

pub fn is_choice_type(type_code: &str) -> bool {
    type_code == TYPE_SELECT || type_code == TYPE_RADIOGRP
}
