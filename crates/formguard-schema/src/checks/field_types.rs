//! Checks that depend on the field's component type.

use super::utils::ISO_DATE;
use formguard_types::compat::{has_value, str_prop};
use formguard_types::{DocPath, SchemaFinding, ids, vocab};
use serde_json::Value;

pub fn check(field: &Value, type_code: &str, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    match type_code {
        t if vocab::is_lookup_type(t) => check_lookup(field, path, out),
        t if vocab::is_choice_type(t) => check_choice(field, path, out),
        vocab::TYPE_DATEPICKER => check_date(field, path, out),
        vocab::TYPE_CHECKBOX => check_checkbox(field, path, out),
        vocab::TYPE_GROUP => check_group(field, path, out),
        _ => {}
    }
}

fn check_lookup(field: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    if !has_value(field.get("KeyColumn")) {
        out.push(SchemaFinding::error(
            path.key("KeyColumn"),
            "KeyColumn is required for lookup fields",
            ids::CODE_MISSING_KEY_COLUMN,
        ));
    }

    match field.get("LoadDataInfo").filter(|v| has_value(Some(*v))) {
        None => out.push(SchemaFinding::error(
            path.key("LoadDataInfo"),
            "LoadDataInfo is required for lookup fields",
            ids::CODE_MISSING_LOAD_DATA_INFO,
        )),
        Some(info) => check_load_data_info(info, &path.key("LoadDataInfo"), out),
    }

    if let Some(item_info) = field.get("ItemInfo").filter(|v| has_value(Some(*v))) {
        if !has_value(item_info.get("MainProperty")) {
            out.push(SchemaFinding::error(
                path.key("ItemInfo").key("MainProperty"),
                "MainProperty is required in ItemInfo",
                ids::CODE_MISSING_MAIN_PROPERTY,
            ));
        }
    }
}

fn check_load_data_info(info: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    if !has_value(info.get("DataModel")) {
        out.push(SchemaFinding::error(
            path.key("DataModel"),
            "DataModel is required in LoadDataInfo",
            ids::CODE_MISSING_DATA_MODEL,
        ));
    }

    let columns_path = path.key("ColumnsDefinition");
    match info.get("ColumnsDefinition") {
        Some(Value::Array(columns)) if columns.is_empty() => out.push(SchemaFinding::error(
            columns_path,
            "ColumnsDefinition must contain at least one column",
            ids::CODE_EMPTY_COLUMNS_DEFINITION,
        )),
        Some(Value::Array(columns)) => {
            for (index, column) in columns.iter().enumerate() {
                let column_path = columns_path.index(index);
                if !has_value(column.get("DataField")) {
                    out.push(SchemaFinding::error(
                        column_path.key("DataField"),
                        "DataField is required for each column",
                        ids::CODE_MISSING_DATA_FIELD,
                    ));
                }
                if !has_value(column.get("DataType")) {
                    out.push(SchemaFinding::error(
                        column_path.key("DataType"),
                        "DataType is required for each column",
                        ids::CODE_MISSING_DATA_TYPE,
                    ));
                }
            }
        }
        _ => out.push(SchemaFinding::error(
            columns_path,
            "ColumnsDefinition array is required",
            ids::CODE_MISSING_COLUMNS_DEFINITION,
        )),
    }
}

fn check_choice(field: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    let options_path = path.key("OptionValues");
    // Objects and arrays both count as option collections.
    let option_count = match field.get("OptionValues") {
        Some(Value::Object(map)) => Some(map.len()),
        Some(Value::Array(items)) => Some(items.len()),
        _ => None,
    };

    match option_count {
        None => out.push(SchemaFinding::error(
            options_path,
            "OptionValues object is required for SELECT/RADIOGRP fields",
            ids::CODE_MISSING_OPTION_VALUES,
        )),
        Some(0) => out.push(SchemaFinding::warning(
            options_path,
            "OptionValues is empty",
            ids::CODE_EMPTY_OPTION_VALUES,
        )),
        Some(_) => {}
    }
}

fn check_date(field: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    if str_prop(field, "Value").is_some_and(|v| !ISO_DATE.is_match(v)) {
        out.push(SchemaFinding::warning(
            path.key("Value"),
            "Date value should be in YYYY-MM-DD format",
            ids::CODE_INVALID_DATE_FORMAT,
        ));
    }
}

fn check_checkbox(field: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    if field.get("Value").is_some_and(|v| !v.is_boolean()) {
        out.push(SchemaFinding::warning(
            path.key("Value"),
            "Checkbox value should be boolean",
            ids::CODE_INVALID_CHECKBOX_VALUE,
        ));
    }
}

fn check_group(field: &Value, path: &DocPath, out: &mut Vec<SchemaFinding>) {
    let children = field.get("ChildFields");
    if !has_value(children) {
        out.push(SchemaFinding::error(
            path.key("ChildFields"),
            "ChildFields is required for GROUP type",
            ids::CODE_MISSING_CHILD_FIELDS,
        ));
    } else if !children.is_some_and(Value::is_array) {
        out.push(SchemaFinding::error(
            path.key("ChildFields"),
            "ChildFields must be an array",
            ids::CODE_INVALID_CHILD_FIELDS_TYPE,
        ));
    }
}
