use crate::coerce::is_empty_value;
use crate::condition::evaluate_condition_expression;
use crate::model::{FieldValues, FormDefinition, FormField, ValidationRule};
use crate::report::{FORM_FIELD_ID, ValidationError, ValidationResult};
use serde_json::Value;
use std::collections::BTreeMap;

/// Business validation of a live form: a definition plus the values entered so far.
///
/// The engine borrows the definition and owns the value map, so
/// [`update_field_value`](Self::update_field_value) is visible to every later call.
#[derive(Clone, Debug)]
pub struct ValidationEngine<'a> {
    form: &'a FormDefinition,
    values: FieldValues,
}

impl<'a> ValidationEngine<'a> {
    pub fn new(form: &'a FormDefinition, values: FieldValues) -> Self {
        Self { form, values }
    }

    /// Engine with no values entered yet.
    pub fn with_form(form: &'a FormDefinition) -> Self {
        Self::new(form, FieldValues::new())
    }

    pub fn form(&self) -> &'a FormDefinition {
        self.form
    }

    /// Validate every top-level field, then the form-level rules. Group children
    /// are not visited; call [`validate_field`](Self::validate_field) on them directly.
    pub fn validate_form(&self) -> ValidationResult {
        let _span = tracing::debug_span!("validate_form", menu_id = %self.form.menu_id).entered();

        let mut result = ValidationResult::new(Vec::new(), Vec::new());

        for field in &self.form.fields {
            result.extend(self.validate_field(field));
        }

        for rule in &self.form.validations {
            if !self.evaluate_validation_rule(rule) {
                result.push_rule_failure(ValidationError {
                    field_id: FORM_FIELD_ID.to_string(),
                    message: self.validation_message(rule, None),
                    error_type: rule.rule_type,
                    rule: Some(rule.clone()),
                });
            }
        }

        tracing::debug!(
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "form validated"
        );
        result
    }

    /// Required check plus the field's own rules. Does not consult enablement
    /// and does not descend into group children.
    pub fn validate_field(&self, field: &FormField) -> ValidationResult {
        let mut result = ValidationResult::new(Vec::new(), Vec::new());

        if field.required && is_empty_value(self.values.get(&field.id)) {
            result
                .errors
                .push(ValidationError::required(&field.id, &field.label));
            result.is_valid = false;
        }

        for rule in &field.validations {
            if !self.evaluate_validation_rule(rule) {
                result.push_rule_failure(ValidationError {
                    field_id: field.id.clone(),
                    message: self.validation_message(rule, Some(field)),
                    error_type: rule.rule_type,
                    rule: Some(rule.clone()),
                });
            }
        }

        result
    }

    /// A rule without a condition expression always passes.
    pub fn evaluate_validation_rule(&self, rule: &ValidationRule) -> bool {
        rule.condition_expression
            .as_ref()
            .is_none_or(|expr| evaluate_condition_expression(expr, &self.values))
    }

    pub fn validation_message(&self, rule: &ValidationRule, field: Option<&FormField>) -> String {
        match field {
            Some(field) => format!("Validation failed for {}", field.label),
            None => format!("Form validation failed for rule {}", rule.id),
        }
    }

    /// Fields without `EnabledWhen` are always enabled.
    pub fn is_field_enabled(&self, field: &FormField) -> bool {
        field
            .enabled_when
            .as_ref()
            .is_none_or(|expr| evaluate_condition_expression(expr, &self.values))
    }

    /// Enablement of every field in the tree, keyed by id.
    pub fn enabled_fields(&self) -> BTreeMap<String, bool> {
        self.form
            .walk_fields()
            .map(|field| (field.id.clone(), self.is_field_enabled(field)))
            .collect()
    }

    pub fn update_field_value(&mut self, field_id: &str, value: Value) {
        self.values.insert(field_id.to_string(), value);
    }

    pub fn field_value(&self, field_id: &str) -> Option<&Value> {
        self.values.get(field_id)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }
}
