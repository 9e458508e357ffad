//! The `evaluate` use case: pre-check a form, then run business validation against values.

use anyhow::Context;
use formguard_domain::model::parse_field_values;
use formguard_domain::{FieldValues, FormDefinition, ValidationEngine, ValidationResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Input for the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateInput<'a> {
    /// Form definition JSON text.
    pub form: &'a str,
    /// Field values as a JSON object; `None` evaluates against an empty value map.
    pub values: Option<&'a str>,
    /// Restrict business validation to a single field.
    pub field: Option<&'a str>,
}

/// Output from the evaluate use case, serialized as-is by the CLI.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluateOutput {
    /// Result of the inline key pre-check.
    pub precheck: ValidationResult,
    /// Business validation. Absent when the pre-check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
    /// Enablement of every field, keyed by id. Empty when the pre-check failed.
    pub enabled: BTreeMap<String, bool>,
}

impl EvaluateOutput {
    pub fn is_valid(&self) -> bool {
        self.precheck.is_valid && self.validation.as_ref().is_some_and(|v| v.is_valid)
    }
}

pub fn run_evaluate(input: EvaluateInput<'_>) -> anyhow::Result<EvaluateOutput> {
    let document: serde_json::Value =
        serde_json::from_str(input.form).context("parse form definition json")?;

    let precheck = formguard_domain::validate_json_schema(&document);
    if !precheck.is_valid {
        tracing::debug!(errors = precheck.errors.len(), "pre-check failed");
        return Ok(EvaluateOutput {
            precheck,
            validation: None,
            enabled: BTreeMap::new(),
        });
    }

    let form = FormDefinition::from_value(document).context("load form definition")?;
    let values: FieldValues = match input.values {
        Some(text) => parse_field_values(text).context("parse field values")?,
        None => FieldValues::new(),
    };

    let engine = ValidationEngine::new(&form, values);
    let validation = match input.field {
        Some(id) => {
            let field = form
                .find_field(id)
                .with_context(|| format!("unknown field id: {id}"))?;
            engine.validate_field(field)
        }
        None => engine.validate_form(),
    };

    Ok(EvaluateOutput {
        precheck,
        validation: Some(validation),
        enabled: engine.enabled_fields(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: &str = r#"{
        "MenuID": "ORD01", "FormWidth": "700px", "Layout": "PROCESS", "Label": "Orders",
        "Fields": [
            {"Id": "kind", "type": "SELECT", "label": "Kind", "OptionValues": {"A": "A", "B": "B"}},
            {"Id": "ref", "type": "TEXT", "label": "Reference", "required": true,
             "EnabledWhen": {"Conditions": [{"RightField": "kind", "Operator": "EQ", "Value": "B"}]}}
        ],
        "Validations": [
            {"Id": "kind_set", "Type": "WARNING",
             "CondExpression": {"Conditions": [{"RightField": "kind", "Operator": "ISNN"}]}}
        ]
    }"#;

    #[test]
    fn evaluates_form_and_enablement() {
        let output = run_evaluate(EvaluateInput {
            form: FORM,
            values: Some(r#"{"kind": "B"}"#),
            field: None,
        })
        .expect("evaluate");

        assert!(output.precheck.is_valid);
        let validation = output.validation.as_ref().expect("validation ran");
        assert!(!validation.is_valid);
        assert_eq!(validation.errors[0].message, "Reference is required");
        assert_eq!(output.enabled.get("ref"), Some(&true));
        assert_eq!(output.enabled.get("kind"), Some(&true));
        assert!(!output.is_valid());
    }

    #[test]
    fn single_field_validation() {
        let output = run_evaluate(EvaluateInput {
            form: FORM,
            values: Some(r#"{"kind": "A", "ref": "R-1"}"#),
            field: Some("ref"),
        })
        .expect("evaluate");
        assert!(output.is_valid());
        assert_eq!(output.enabled.get("ref"), Some(&false));
    }

    #[test]
    fn failed_precheck_skips_the_engine() {
        let output = run_evaluate(EvaluateInput {
            form: r#"{"MenuID": "X", "Fields": [{"Id": "a"}]}"#,
            values: None,
            field: None,
        })
        .expect("evaluate");

        assert!(!output.is_valid());
        assert!(output.validation.is_none());
        assert!(output.enabled.is_empty());
        let messages: Vec<_> = output.precheck.errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Missing required property: FormWidth",
                "Missing required property: Layout",
                "Missing required property: Label",
                "Field 1: Missing type property",
                "Field 1: Missing label property",
            ]
        );
    }

    #[test]
    fn unknown_field_and_bad_values_are_errors() {
        let err = run_evaluate(EvaluateInput {
            form: FORM,
            values: None,
            field: Some("nope"),
        })
        .expect_err("unknown field");
        assert!(err.to_string().contains("unknown field id: nope"));

        let err = run_evaluate(EvaluateInput {
            form: FORM,
            values: Some("[1, 2]"),
            field: None,
        })
        .expect_err("values must be an object");
        assert_eq!(err.to_string(), "parse field values");
    }

    #[test]
    fn output_serializes_camel_case_results() {
        let output = run_evaluate(EvaluateInput {
            form: FORM,
            values: Some(r#"{"kind": "A", "ref": "x"}"#),
            field: None,
        })
        .expect("evaluate");
        let json = serde_json::to_value(&output).expect("serialize");
        assert_eq!(json["validation"]["isValid"], true);
        assert_eq!(json["enabled"]["ref"], false);
    }
}
