//! Pure form evaluation (no IO).
//!
//! Input: a form definition loaded elsewhere plus the current field values.
//! Output: business validation results and enablement answers.

#![forbid(unsafe_code)]

pub mod condition;
pub mod error;
pub mod model;
pub mod precheck;
pub mod report;

mod coerce;
mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use condition::{evaluate_condition, evaluate_condition_expression};
pub use engine::ValidationEngine;
pub use error::ModelError;
pub use model::{FieldValues, FormDefinition, FormField};
pub use precheck::validate_json_schema;
pub use report::{ValidationError, ValidationResult};
