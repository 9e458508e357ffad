//! Stable DTOs, codes, and vocabularies used across the formguard workspace.
//!
//! This crate is intentionally boring:
//! - stable finding codes
//! - document paths for structural findings
//! - the shared operator / component / layout vocabularies
//! - structural validation results and the emitted report envelope
//! - explain registry for remediation guidance
//! - accessors for legacy dual-cased field properties

#![forbid(unsafe_code)]

pub mod compat;
pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod result;
pub mod vocab;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::DocPath;
pub use receipt::{
    CheckData, Finding, FormguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict,
    VerdictCounts,
};
pub use result::{SchemaFinding, SchemaValidationResult, Severity};
