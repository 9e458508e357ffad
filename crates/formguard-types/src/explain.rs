//! Explain registry for finding codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// What triggers the finding and why it matters.
    pub description: &'static str,
    /// How to fix it.
    pub remediation: &'static str,
    /// Before/after document snippets.
    pub examples: ExamplePair,
}

/// Before and after document snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Snippet that would trigger the finding.
    pub before: &'static str,
    /// Snippet that passes.
    pub after: &'static str,
}

const fn entry(
    title: &'static str,
    description: &'static str,
    remediation: &'static str,
    before: &'static str,
    after: &'static str,
) -> Explanation {
    Explanation {
        title,
        description,
        remediation,
        examples: ExamplePair { before, after },
    }
}

const REGISTRY: &[(&str, Explanation)] = &[
    (
        ids::CODE_INVALID_JSON,
        entry(
            "Invalid JSON",
            "The document could not be parsed as JSON, or its root is null.",
            "Fix the syntax error (trailing commas, unquoted keys, unbalanced braces) and re-import.",
            r#"{"MenuID": "ABC",}"#,
            r#"{"MenuID": "ABC"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_REQUIRED_FIELD,
        entry(
            "Missing Form Property",
            "One of MenuID, FormWidth, Layout, or Label is missing or empty at the document root.",
            "Add the property with a non-empty value.",
            r#"{"MenuID": "ABC", "FormWidth": "700px", "Layout": "PROCESS", "Fields": []}"#,
            r#"{"MenuID": "ABC", "FormWidth": "700px", "Layout": "PROCESS", "Label": "Orders", "Fields": []}"#,
        ),
    ),
    (
        ids::CODE_INVALID_MENU_ID,
        entry(
            "Invalid MenuID",
            "MenuID must be 1 to 10 uppercase letters or digits.",
            "Rename the menu identifier using only A-Z and 0-9.",
            r#"{"MenuID": "abc_bad!"}"#,
            r#"{"MenuID": "ABC01"}"#,
        ),
    ),
    (
        ids::CODE_INVALID_FORM_WIDTH,
        entry(
            "Invalid FormWidth",
            "FormWidth must be a pixel size such as 700px, or exactly 100%.",
            "Use a whole number followed by px, or 100%.",
            r#"{"FormWidth": "70em"}"#,
            r#"{"FormWidth": "700px"}"#,
        ),
    ),
    (
        ids::CODE_NON_STANDARD_LAYOUT,
        entry(
            "Non-standard Layout",
            "Layout is not one of PROCESS, INQUIRY, MAINTENANCE, REPORT. The form still loads; renderers may fall back to a default layout.",
            "Pick a standard layout unless the target renderer knows the custom one.",
            r#"{"Layout": "WIZARD"}"#,
            r#"{"Layout": "PROCESS"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_FIELDS_ARRAY,
        entry(
            "Missing Fields Array",
            "The document has no Fields array, or Fields is not an array.",
            "Add a Fields array; it may be empty.",
            r#"{"MenuID": "ABC", "Fields": {}}"#,
            r#"{"MenuID": "ABC", "Fields": []}"#,
        ),
    ),
    (
        ids::CODE_MISSING_REQUIRED_PROPERTY,
        entry(
            "Missing Field Property",
            "A field is missing its Id or type.",
            "Give every field an Id and a component type.",
            r#"{"label": "Name"}"#,
            r#"{"Id": "name", "type": "TEXT", "label": "Name"}"#,
        ),
    ),
    (
        ids::CODE_INVALID_FIELD_ID,
        entry(
            "Invalid Field Id",
            "Field ids must start with a letter and contain only letters, digits, and underscores.",
            "Rename the field id.",
            r#"{"Id": "1st-name"}"#,
            r#"{"Id": "first_name"}"#,
        ),
    ),
    (
        ids::CODE_NON_STANDARD_FIELD_TYPE,
        entry(
            "Non-standard Field Type",
            "The field type is not in the component vocabulary. Custom components are allowed but get no type-specific checks.",
            "Use a standard component type unless the renderer registers the custom one.",
            r#"{"Id": "rate", "type": "SLIDER"}"#,
            r#"{"Id": "rate", "type": "TEXT"}"#,
        ),
    ),
    (
        ids::CODE_INVALID_WIDTH_FORMAT,
        entry(
            "Invalid Field Width",
            "Field Width must be a whole number, optionally followed by px or %.",
            "Use values like 200, 200px, or 50%.",
            r#"{"Width": "wide"}"#,
            r#"{"Width": "50%"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_KEY_COLUMN,
        entry(
            "Lookup Without KeyColumn",
            "GRIDLKP and LSTLKP fields need a KeyColumn naming the value column.",
            "Set KeyColumn to the column holding the stored key.",
            r#"{"Id": "fund", "type": "GRIDLKP"}"#,
            r#"{"Id": "fund", "type": "GRIDLKP", "KeyColumn": "FundId"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_LOAD_DATA_INFO,
        entry(
            "Lookup Without LoadDataInfo",
            "GRIDLKP and LSTLKP fields need LoadDataInfo describing where rows come from.",
            "Add LoadDataInfo with a DataModel and ColumnsDefinition.",
            r#"{"Id": "fund", "type": "GRIDLKP", "KeyColumn": "FundId"}"#,
            r#"{"Id": "fund", "type": "GRIDLKP", "KeyColumn": "FundId", "LoadDataInfo": {"DataModel": "Fund", "ColumnsDefinition": [{"DataField": "FundId", "DataType": "STRING"}]}}"#,
        ),
    ),
    (
        ids::CODE_MISSING_DATA_MODEL,
        entry(
            "LoadDataInfo Without DataModel",
            "LoadDataInfo must name the DataModel the lookup reads from.",
            "Set LoadDataInfo.DataModel.",
            r#"{"LoadDataInfo": {"ColumnsDefinition": []}}"#,
            r#"{"LoadDataInfo": {"DataModel": "Fund", "ColumnsDefinition": []}}"#,
        ),
    ),
    (
        ids::CODE_MISSING_COLUMNS_DEFINITION,
        entry(
            "LoadDataInfo Without Columns",
            "LoadDataInfo.ColumnsDefinition is missing or not an array.",
            "Add a ColumnsDefinition array with at least one column.",
            r#"{"LoadDataInfo": {"DataModel": "Fund"}}"#,
            r#"{"LoadDataInfo": {"DataModel": "Fund", "ColumnsDefinition": [{"DataField": "FundId", "DataType": "STRING"}]}}"#,
        ),
    ),
    (
        ids::CODE_EMPTY_COLUMNS_DEFINITION,
        entry(
            "Empty ColumnsDefinition",
            "A lookup with no columns cannot display or select anything.",
            "Declare at least one column.",
            r#"{"ColumnsDefinition": []}"#,
            r#"{"ColumnsDefinition": [{"DataField": "FundId", "DataType": "STRING"}]}"#,
        ),
    ),
    (
        ids::CODE_MISSING_DATA_FIELD,
        entry(
            "Column Without DataField",
            "Every lookup column must name the DataField it displays.",
            "Set DataField on the column.",
            r#"{"DataType": "STRING"}"#,
            r#"{"DataField": "FundId", "DataType": "STRING"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_DATA_TYPE,
        entry(
            "Column Without DataType",
            "Every lookup column must declare its DataType.",
            "Set DataType to one of the field data types (STRING, NUMERIC, DATE, ...).",
            r#"{"DataField": "FundId"}"#,
            r#"{"DataField": "FundId", "DataType": "STRING"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_MAIN_PROPERTY,
        entry(
            "ItemInfo Without MainProperty",
            "When ItemInfo is present it must name the MainProperty shown for the selected row.",
            "Set ItemInfo.MainProperty or remove ItemInfo.",
            r#"{"ItemInfo": {"DescProperty": "Name"}}"#,
            r#"{"ItemInfo": {"MainProperty": "FundId", "DescProperty": "Name"}}"#,
        ),
    ),
    (
        ids::CODE_MISSING_OPTION_VALUES,
        entry(
            "Choice Without OptionValues",
            "SELECT and RADIOGRP fields need an OptionValues object mapping keys to labels.",
            "Add OptionValues.",
            r#"{"Id": "status", "type": "SELECT"}"#,
            r#"{"Id": "status", "type": "SELECT", "OptionValues": {"A": "Active"}}"#,
        ),
    ),
    (
        ids::CODE_EMPTY_OPTION_VALUES,
        entry(
            "Empty OptionValues",
            "The choice field has no options yet. It loads, but users cannot pick anything.",
            "Add at least one option.",
            r#"{"OptionValues": {}}"#,
            r#"{"OptionValues": {"A": "Active"}}"#,
        ),
    ),
    (
        ids::CODE_INVALID_DATE_FORMAT,
        entry(
            "Non-ISO Date Default",
            "A DATEPICKER default Value should be written as YYYY-MM-DD.",
            "Rewrite the default date in ISO form.",
            r#"{"type": "DATEPICKER", "Value": "01/02/2026"}"#,
            r#"{"type": "DATEPICKER", "Value": "2026-01-02"}"#,
        ),
    ),
    (
        ids::CODE_INVALID_CHECKBOX_VALUE,
        entry(
            "Non-boolean Checkbox Default",
            "A CHECKBOX default Value should be true or false.",
            "Use a JSON boolean.",
            r#"{"type": "CHECKBOX", "Value": "yes"}"#,
            r#"{"type": "CHECKBOX", "Value": true}"#,
        ),
    ),
    (
        ids::CODE_MISSING_CHILD_FIELDS,
        entry(
            "Group Without ChildFields",
            "GROUP fields hold their members in ChildFields.",
            "Add a ChildFields array.",
            r#"{"Id": "address", "type": "GROUP"}"#,
            r#"{"Id": "address", "type": "GROUP", "ChildFields": []}"#,
        ),
    ),
    (
        ids::CODE_INVALID_CHILD_FIELDS_TYPE,
        entry(
            "ChildFields Is Not An Array",
            "GROUP ChildFields must be an array of fields.",
            "Wrap the child fields in an array.",
            r#"{"type": "GROUP", "ChildFields": {"Id": "street"}}"#,
            r#"{"type": "GROUP", "ChildFields": [{"Id": "street", "type": "TEXT"}]}"#,
        ),
    ),
    (
        ids::CODE_INVALID_CHILD_FIELDS,
        entry(
            "Group Children Not Validated",
            "Child fields of a GROUP are only checked when ChildFields is an array.",
            "Wrap the child fields in an array so they are validated.",
            r#"{"type": "GROUP", "ChildFields": "street"}"#,
            r#"{"type": "GROUP", "ChildFields": [{"Id": "street", "type": "TEXT"}]}"#,
        ),
    ),
    (
        ids::CODE_MISSING_ACTION_ID,
        entry(
            "Action Without ID",
            "Every action needs an ID.",
            "Set ID on the action.",
            r#"{"Label": "Save", "MethodToInvoke": "save"}"#,
            r#"{"ID": "save", "Label": "Save", "MethodToInvoke": "save"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_ACTION_LABEL,
        entry(
            "Action Without Label",
            "Every action needs a Label for its button.",
            "Set Label on the action.",
            r#"{"ID": "save", "MethodToInvoke": "save"}"#,
            r#"{"ID": "save", "Label": "Save", "MethodToInvoke": "save"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_METHOD_TO_INVOKE,
        entry(
            "Action Without MethodToInvoke",
            "Every action must name the method it invokes.",
            "Set MethodToInvoke on the action.",
            r#"{"ID": "save", "Label": "Save"}"#,
            r#"{"ID": "save", "Label": "Save", "MethodToInvoke": "save"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_VALIDATION_ID,
        entry(
            "Rule Without Id",
            "Validation rules need an Id so failures can be traced back to them.",
            "Set Id on the rule.",
            r#"{"Type": "ERROR"}"#,
            r#"{"Id": "amount_positive", "Type": "ERROR"}"#,
        ),
    ),
    (
        ids::CODE_INVALID_VALIDATION_TYPE,
        entry(
            "Invalid Rule Type",
            "A validation rule Type must be exactly ERROR or WARNING.",
            "Use ERROR for blocking rules and WARNING for advisory ones.",
            r#"{"Id": "r1", "Type": "FATAL"}"#,
            r#"{"Id": "r1", "Type": "ERROR"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_CONDITIONS,
        entry(
            "Expression Without Conditions",
            "A condition expression needs a Conditions array.",
            "Add Conditions; an empty array always evaluates to true.",
            r#"{"LogicalOperator": "AND"}"#,
            r#"{"LogicalOperator": "AND", "Conditions": [{"RightField": "amount", "Operator": "GT", "Value": 0}]}"#,
        ),
    ),
    (
        ids::CODE_INVALID_LOGICAL_OPERATOR,
        entry(
            "Invalid LogicalOperator",
            "LogicalOperator must be AND or OR. Anything else is evaluated as AND.",
            "Use AND or OR, or omit it for AND.",
            r#"{"LogicalOperator": "XOR", "Conditions": []}"#,
            r#"{"LogicalOperator": "OR", "Conditions": []}"#,
        ),
    ),
    (
        ids::CODE_MISSING_RIGHT_FIELD,
        entry(
            "Condition Without RightField",
            "RightField names the field whose current value is tested.",
            "Set RightField to a field Id.",
            r#"{"Operator": "EQ", "Value": "A"}"#,
            r#"{"RightField": "status", "Operator": "EQ", "Value": "A"}"#,
        ),
    ),
    (
        ids::CODE_MISSING_OPERATOR,
        entry(
            "Condition Without Operator",
            "Every condition needs an Operator.",
            "Set Operator to one of the standard codes (EQ, NEQ, GT, IN, BETWEEN, ...).",
            r#"{"RightField": "status", "Value": "A"}"#,
            r#"{"RightField": "status", "Operator": "EQ", "Value": "A"}"#,
        ),
    ),
    (
        ids::CODE_NON_STANDARD_OPERATOR,
        entry(
            "Non-standard Operator",
            "The operator is not in the operator vocabulary. The evaluator treats unknown operators as satisfied, so the condition never blocks.",
            "Use a standard operator code.",
            r#"{"RightField": "name", "Operator": "CONTAINS", "Value": "x"}"#,
            r#"{"RightField": "name", "Operator": "CT", "Value": "x"}"#,
        ),
    ),
    (
        ids::CODE_NON_STANDARD_VALUE_TYPE,
        entry(
            "Non-standard ValueType",
            "ValueType should be STRING, NUMBER, DATE, or BOOL.",
            "Use a standard value type.",
            r#"{"ValueType": "MONEY"}"#,
            r#"{"ValueType": "NUMBER"}"#,
        ),
    ),
    (
        ids::CODE_RUNTIME_ERROR,
        entry(
            "Tool Runtime Error",
            "formguard itself failed: unreadable input, invalid configuration, or an I/O error.",
            "Read the message, fix the environment or config, and re-run.",
            "formguard check missing.json",
            "formguard check form.json",
        ),
    ),
];

/// Look up an explanation by code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(code: &str) -> Option<Explanation> {
    REGISTRY
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, exp)| exp.clone())
}

/// List all known codes in registry order.
pub fn all_codes() -> Vec<&'static str> {
    REGISTRY.iter().map(|(code, _)| *code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_code_has_content() {
        for code in all_codes() {
            let exp = lookup_explanation(code).expect("registered");
            assert!(!exp.title.is_empty(), "{code} has empty title");
            assert!(!exp.description.is_empty(), "{code} has empty description");
            assert!(!exp.remediation.is_empty(), "{code} has empty remediation");
        }
    }

    #[test]
    fn codes_are_unique_and_screaming_snake_case() {
        let codes = all_codes();
        let mut seen = std::collections::BTreeSet::new();
        for code in &codes {
            assert!(seen.insert(*code), "duplicate code {code}");
            assert!(
                code.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{code} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn unknown_code_has_no_explanation() {
        assert!(lookup_explanation("NOT_A_CODE").is_none());
    }

    #[test]
    fn example_snippets_for_document_codes_are_json() {
        for code in all_codes() {
            if code == ids::CODE_INVALID_JSON || code == ids::CODE_RUNTIME_ERROR {
                continue;
            }
            let exp = lookup_explanation(code).expect("registered");
            serde_json::from_str::<serde_json::Value>(exp.examples.before)
                .unwrap_or_else(|e| panic!("{code} before snippet: {e}"));
            serde_json::from_str::<serde_json::Value>(exp.examples.after)
                .unwrap_or_else(|e| panic!("{code} after snippet: {e}"));
        }
    }
}
