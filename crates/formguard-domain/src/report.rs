use crate::model::{RuleType, ValidationRule};
use serde::{Deserialize, Serialize};

/// Field id used for failures of form-level rules.
pub const FORM_FIELD_ID: &str = formguard_types::ids::FORM_FIELD_ID;

/// Field id used by the inline pre-check for missing top-level properties.
pub const SCHEMA_FIELD_ID: &str = formguard_types::ids::SCHEMA_FIELD_ID;

/// One business-validation failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field_id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: RuleType,
    /// The rule that failed. Absent for the built-in required check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<ValidationRule>,
}

impl ValidationError {
    pub fn required(field_id: &str, label: &str) -> Self {
        Self {
            field_id: field_id.to_string(),
            message: format!("{label} is required"),
            error_type: RuleType::Error,
            rule: None,
        }
    }

    pub fn plain(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            message: message.into(),
            error_type: RuleType::Error,
            rule: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Build a result; validity follows from the error list alone.
    pub fn new(errors: Vec<ValidationError>, warnings: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Route a failed rule to errors or warnings by its type.
    /// Unrecognized rule types land with the warnings.
    pub(crate) fn push_rule_failure(&mut self, error: ValidationError) {
        match error.error_type {
            RuleType::Error => self.errors.push(error),
            RuleType::Warning | RuleType::Unrecognized => self.warnings.push(error),
        }
        self.is_valid = self.errors.is_empty();
    }

    pub(crate) fn extend(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.is_valid = self.errors.is_empty();
    }
}
