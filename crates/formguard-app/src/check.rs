//! The `check` use case: structurally validate a document and produce a report.

use anyhow::Context;
use formguard_schema::SchemaReport;
use formguard_settings::{Overrides, ResolvedConfig};
use formguard_types::{
    FormguardReport, ReportEnvelope, SCHEMA_REPORT_V1, SchemaValidationResult, ToolMeta, Verdict,
};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Where the document came from, recorded in the report (`-` for stdin).
    pub source: &'a str,
    /// Raw document text. Unparseable text is a finding, not an error.
    pub document: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: FormguardReport,
    /// Raw validator output, before policy. Feeds the legacy text report.
    pub result: SchemaValidationResult,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, validate the document, apply policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        formguard_settings::FormguardConfigV1::default()
    } else {
        formguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = formguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let result = formguard_schema::validate(input.document);
    let SchemaReport {
        verdict,
        findings,
        mut data,
        counts,
    } = formguard_schema::check(input.document, &resolved.effective);
    data.source = input.source.to_string();

    tracing::debug!(
        source = input.source,
        verdict = ?verdict,
        findings = findings.len(),
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        counts,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        result,
        resolved_config: resolved,
    })
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "formguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formguard_types::ids;

    const VALID: &str = r#"{"MenuID":"ORD01","FormWidth":"700px","Layout":"PROCESS","Label":"Orders","Fields":[{"Id":"qty","type":"TEXT","label":"Qty"}]}"#;

    fn input<'a>(document: &'a str, config_text: &'a str) -> CheckInput<'a> {
        CheckInput {
            source: "order.json",
            document,
            config_text,
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn empty_config_uses_defaults() {
        let output = run_check(input(VALID, "")).expect("run_check");
        assert_eq!(output.resolved_config.effective.profile, "default");
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(output.report.data.source, "order.json");
        assert_eq!(output.report.data.fields_scanned, 1);
        assert!(output.result.is_valid);
    }

    #[test]
    fn unparseable_document_is_a_failing_report() {
        let output = run_check(input("{oops", "")).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Fail);
        assert_eq!(output.report.findings[0].code, ids::CODE_INVALID_JSON);
        assert_eq!(output.report.counts.error, 1);
    }

    #[test]
    fn config_and_overrides_apply() {
        let doc = VALID.replace("PROCESS", "GRID");

        let output = run_check(input(&doc, "profile = \"strict\"\n")).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Fail);
        assert!(output.result.is_valid);

        let mut relaxed = input(&doc, "profile = \"strict\"\n");
        relaxed.overrides.fail_on = Some("error".to_string());
        let output = run_check(relaxed).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Warn);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let err = run_check(input(VALID, "profile = [")).expect_err("bad toml");
        assert!(err.to_string().contains("parse config"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
