//! Stable finding codes.
//!
//! Codes are SCREAMING_SNAKE_CASE and never change once published: report consumers,
//! snapshot tests and config overrides key on them.

// Document
pub const CODE_INVALID_JSON: &str = "INVALID_JSON";

// Root
pub const CODE_MISSING_REQUIRED_FIELD: &str = "MISSING_REQUIRED_FIELD";
pub const CODE_INVALID_MENU_ID: &str = "INVALID_MENU_ID";
pub const CODE_INVALID_FORM_WIDTH: &str = "INVALID_FORM_WIDTH";
pub const CODE_NON_STANDARD_LAYOUT: &str = "NON_STANDARD_LAYOUT";
pub const CODE_MISSING_FIELDS_ARRAY: &str = "MISSING_FIELDS_ARRAY";

// Fields
pub const CODE_MISSING_REQUIRED_PROPERTY: &str = "MISSING_REQUIRED_PROPERTY";
pub const CODE_INVALID_FIELD_ID: &str = "INVALID_FIELD_ID";
pub const CODE_NON_STANDARD_FIELD_TYPE: &str = "NON_STANDARD_FIELD_TYPE";
pub const CODE_INVALID_WIDTH_FORMAT: &str = "INVALID_WIDTH_FORMAT";

// Fields: GRIDLKP / LSTLKP
pub const CODE_MISSING_KEY_COLUMN: &str = "MISSING_KEY_COLUMN";
pub const CODE_MISSING_LOAD_DATA_INFO: &str = "MISSING_LOAD_DATA_INFO";
pub const CODE_MISSING_DATA_MODEL: &str = "MISSING_DATA_MODEL";
pub const CODE_MISSING_COLUMNS_DEFINITION: &str = "MISSING_COLUMNS_DEFINITION";
pub const CODE_EMPTY_COLUMNS_DEFINITION: &str = "EMPTY_COLUMNS_DEFINITION";
pub const CODE_MISSING_DATA_FIELD: &str = "MISSING_DATA_FIELD";
pub const CODE_MISSING_DATA_TYPE: &str = "MISSING_DATA_TYPE";
pub const CODE_MISSING_MAIN_PROPERTY: &str = "MISSING_MAIN_PROPERTY";

// Fields: SELECT / RADIOGRP
pub const CODE_MISSING_OPTION_VALUES: &str = "MISSING_OPTION_VALUES";
pub const CODE_EMPTY_OPTION_VALUES: &str = "EMPTY_OPTION_VALUES";

// Fields: DATEPICKER / CHECKBOX
pub const CODE_INVALID_DATE_FORMAT: &str = "INVALID_DATE_FORMAT";
pub const CODE_INVALID_CHECKBOX_VALUE: &str = "INVALID_CHECKBOX_VALUE";

// Fields: GROUP
pub const CODE_MISSING_CHILD_FIELDS: &str = "MISSING_CHILD_FIELDS";
pub const CODE_INVALID_CHILD_FIELDS_TYPE: &str = "INVALID_CHILD_FIELDS_TYPE";
/// Reported alongside `INVALID_CHILD_FIELDS_TYPE` when recursion into a group is skipped.
pub const CODE_INVALID_CHILD_FIELDS: &str = "INVALID_CHILD_FIELDS";

// Actions
pub const CODE_MISSING_ACTION_ID: &str = "MISSING_ACTION_ID";
pub const CODE_MISSING_ACTION_LABEL: &str = "MISSING_ACTION_LABEL";
pub const CODE_MISSING_METHOD_TO_INVOKE: &str = "MISSING_METHOD_TO_INVOKE";

// Validation rules
pub const CODE_MISSING_VALIDATION_ID: &str = "MISSING_VALIDATION_ID";
pub const CODE_INVALID_VALIDATION_TYPE: &str = "INVALID_VALIDATION_TYPE";

// Condition expressions
pub const CODE_MISSING_CONDITIONS: &str = "MISSING_CONDITIONS";
pub const CODE_INVALID_LOGICAL_OPERATOR: &str = "INVALID_LOGICAL_OPERATOR";
pub const CODE_MISSING_RIGHT_FIELD: &str = "MISSING_RIGHT_FIELD";
pub const CODE_MISSING_OPERATOR: &str = "MISSING_OPERATOR";
pub const CODE_NON_STANDARD_OPERATOR: &str = "NON_STANDARD_OPERATOR";
pub const CODE_NON_STANDARD_VALUE_TYPE: &str = "NON_STANDARD_VALUE_TYPE";

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "RUNTIME_ERROR";

// Business validation attribution
pub const FORM_FIELD_ID: &str = "form";
pub const SCHEMA_FIELD_ID: &str = "schema";
