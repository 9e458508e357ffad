//! Structural validation of form-definition documents (no IO).
//!
//! Input: untrusted JSON, as text or an already parsed value.
//! Output: path- and code-tagged findings, and optionally a policy-applied report
//! with a verdict.

#![forbid(unsafe_code)]

pub mod policy;
pub mod report;

mod checks;
mod engine;
mod fingerprint;
mod input;

#[cfg(test)]
mod proptest;

pub use engine::evaluate;
pub use fingerprint::fingerprint;
pub use input::SchemaInput;
pub use policy::{CodePolicy, EffectiveConfig, FailOn};
pub use report::SchemaReport;

use formguard_types::compat::field_prop;
use formguard_types::{DocPath, SchemaFinding, SchemaValidationResult, Severity, ids, vocab};
use serde_json::Value;

/// Validate a document and return every structural finding.
///
/// Never fails: unparseable input becomes a single `INVALID_JSON` error at `root`.
pub fn validate<'a>(input: impl Into<SchemaInput<'a>>) -> SchemaValidationResult {
    match input.into().parse() {
        Some(doc) => validate_document(&doc),
        None => invalid_json(),
    }
}

/// Validate, then apply the policy in `cfg` to produce a report.
pub fn check<'a>(input: impl Into<SchemaInput<'a>>, cfg: &EffectiveConfig) -> SchemaReport {
    let (result, fields) = match input.into().parse() {
        Some(doc) => (validate_document(&doc), count_fields(&doc)),
        None => (invalid_json(), 0),
    };

    let mut report = evaluate(&result, cfg);
    report.data.fields_scanned = u32::try_from(fields).unwrap_or(u32::MAX);
    report
}

/// Number of field entries in the document, including nested group children.
pub fn count_fields(doc: &Value) -> usize {
    doc.get("Fields")
        .and_then(Value::as_array)
        .map(|fields| count_in(fields))
        .unwrap_or(0)
}

fn count_in(fields: &[Value]) -> usize {
    fields
        .iter()
        .map(|field| {
            let is_group = field_prop(field, "type").and_then(Value::as_str) == Some(vocab::TYPE_GROUP);
            let nested = match field.get("ChildFields") {
                Some(Value::Array(children)) if is_group => count_in(children),
                _ => 0,
            };
            1 + nested
        })
        .sum()
}

fn validate_document(doc: &Value) -> SchemaValidationResult {
    if doc.is_null() {
        return invalid_json();
    }

    let _span = tracing::debug_span!("structural_validation").entered();

    let mut out = Vec::new();
    checks::run_all(doc, &mut out);

    let (errors, warnings): (Vec<_>, Vec<_>) = out
        .into_iter()
        .partition(|f| f.severity == Severity::Error);

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "structural validation finished"
    );
    SchemaValidationResult::from_findings(errors, warnings)
}

fn invalid_json() -> SchemaValidationResult {
    SchemaValidationResult::from_findings(
        vec![SchemaFinding::error(
            DocPath::root(),
            "Invalid JSON format",
            ids::CODE_INVALID_JSON,
        )],
        Vec::new(),
    )
}
