use crate::DocPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity is intentionally small: errors block, warnings inform.
///
/// `Info` never comes out of the validators; it exists so configuration can
/// demote a code without hiding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A single structural finding: where, what, how bad, and a stable code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SchemaFinding {
    pub path: DocPath,
    pub message: String,
    pub severity: Severity,
    pub code: String,
}

impl SchemaFinding {
    pub fn error(path: DocPath, message: impl Into<String>, code: &str) -> Self {
        Self {
            path,
            message: message.into(),
            severity: Severity::Error,
            code: code.to_string(),
        }
    }

    pub fn warning(path: DocPath, message: impl Into<String>, code: &str) -> Self {
        Self {
            path,
            message: message.into(),
            severity: Severity::Warning,
            code: code.to_string(),
        }
    }
}

/// Output of the structural validator. `is_valid` only looks at `errors`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaValidationResult {
    pub is_valid: bool,
    pub errors: Vec<SchemaFinding>,
    pub warnings: Vec<SchemaFinding>,
}

impl SchemaValidationResult {
    pub fn from_findings(errors: Vec<SchemaFinding>, warnings: Vec<SchemaFinding>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|f| f.code == code)
    }

    /// Errors first, then warnings, each in document order.
    pub fn findings(&self) -> impl Iterator<Item = &SchemaFinding> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_ignores_warnings() {
        let result = SchemaValidationResult::from_findings(
            Vec::new(),
            vec![SchemaFinding::warning(
                DocPath::root().key("Layout"),
                "non standard",
                crate::ids::CODE_NON_STANDARD_LAYOUT,
            )],
        );
        assert!(result.is_valid);
        assert!(result.has_code(crate::ids::CODE_NON_STANDARD_LAYOUT));
    }

    #[test]
    fn serializes_with_camel_case_validity_flag() {
        let result = SchemaValidationResult::from_findings(Vec::new(), Vec::new());
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["isValid"], true);
        assert!(json["errors"].as_array().expect("array").is_empty());
    }

    #[test]
    fn severity_serializes_lowercase() {
        let finding = SchemaFinding::error(DocPath::root(), "bad", "INVALID_JSON");
        let json = serde_json::to_value(&finding).expect("serialize");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["path"], "root");
    }
}
