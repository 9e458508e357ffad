use formguard_types::Severity;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// Per-code override. `severity: None` keeps the validator's own severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodePolicy {
    pub enabled: bool,
    pub severity: Option<Severity>,
}

impl CodePolicy {
    pub fn with_severity(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity: Some(severity),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    /// Codes without an entry are reported as the validator emits them.
    pub codes: BTreeMap<String, CodePolicy>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            fail_on: FailOn::Error,
            max_findings: 200,
            codes: BTreeMap::new(),
        }
    }
}

impl EffectiveConfig {
    pub fn is_enabled(&self, code: &str) -> bool {
        self.codes.get(code).is_none_or(|p| p.enabled)
    }

    /// Severity after overrides, or `None` when the code is disabled.
    pub fn effective_severity(&self, code: &str, emitted: Severity) -> Option<Severity> {
        match self.codes.get(code) {
            None => Some(emitted),
            Some(policy) if !policy.enabled => None,
            Some(policy) => Some(policy.severity.unwrap_or(emitted)),
        }
    }
}
