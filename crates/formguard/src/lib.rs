//! Public facade for formguard.
//!
//! Re-exports the pure pieces a form-builder host needs: condition evaluation and
//! business validation (`formguard-domain`), the structural validator
//! (`formguard-schema`), and the shared vocabulary (`formguard-types`).

#![forbid(unsafe_code)]

pub use formguard_domain::{
    FieldValues, FormDefinition, FormField, ModelError, ValidationEngine, ValidationError,
    ValidationResult, evaluate_condition, evaluate_condition_expression, model,
    validate_json_schema,
};
pub use formguard_schema::{
    EffectiveConfig, FailOn, SchemaInput, SchemaReport, check, validate as validate_structure,
};
pub use formguard_types::{
    DocPath, SchemaFinding, SchemaValidationResult, Severity, Verdict, ids, vocab,
};
