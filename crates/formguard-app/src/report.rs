use anyhow::Context;
use formguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use formguard_types::{
    CheckData, DocPath, Finding, FormguardReport, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    Verdict, VerdictCounts, ids,
};
use time::OffsetDateTime;

use crate::check::tool_meta;

pub fn parse_report_json(text: &str) -> anyhow::Result<FormguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse formguard v1 report")
}

pub fn serialize_report(report: &FormguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &FormguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            source: report.data.source.clone(),
            profile: report.data.profile.clone(),
            fields_scanned: report.data.fields_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        code: f.code.clone(),
        path: f.path.as_str().to_string(),
        message: f.message.clone(),
        help: f.help.clone(),
    }
}

/// A failing report with a single `RUNTIME_ERROR` finding, for when the tool itself broke.
pub fn runtime_error_report(source: &str, message: &str) -> FormguardReport {
    let now = OffsetDateTime::now_utc();

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        counts: VerdictCounts {
            info: 0,
            warning: 0,
            error: 1,
        },
        findings: vec![Finding {
            severity: Severity::Error,
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            path: DocPath::root(),
            message: message.to_string(),
            help: Some("Fix the tool error and re-run formguard.".to_string()),
            fingerprint: None,
        }],
        data: CheckData {
            source: source.to_string(),
            profile: "unknown".to_string(),
            fields_scanned: 0,
            findings_total: 1,
            findings_emitted: 1,
            truncated_reason: None,
        },
    }
}
