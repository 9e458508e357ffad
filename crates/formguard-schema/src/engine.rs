use crate::fingerprint::fingerprint;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{SchemaReport, count_severities};
use formguard_types::{
    CheckData, Finding, SchemaValidationResult, Severity, Verdict, lookup_explanation,
};

/// Apply per-code policy, truncation, and the verdict rule to a validation result.
pub fn evaluate(result: &SchemaValidationResult, cfg: &EffectiveConfig) -> SchemaReport {
    let mut findings: Vec<Finding> = result
        .findings()
        .filter_map(|f| {
            let severity = cfg.effective_severity(&f.code, f.severity)?;
            Some(Finding {
                severity,
                code: f.code.clone(),
                path: f.path.clone(),
                message: f.message.clone(),
                help: lookup_explanation(&f.code).map(|e| e.remediation.to_string()),
                fingerprint: Some(fingerprint(&f.code, f.path.as_str())),
            })
        })
        .collect();

    // Overrides can reorder severities; document order holds within each level.
    findings.sort_by_key(|f| severity_rank(f.severity));

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = count_severities(&emitted);

    let data = CheckData {
        source: String::new(),
        profile: cfg.profile.clone(),
        fields_scanned: 0,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    SchemaReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn severity_rank(sev: Severity) -> u8 {
    match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CodePolicy;
    use formguard_types::{DocPath, SchemaFinding, ids};

    fn result_with_layout_warning() -> SchemaValidationResult {
        SchemaValidationResult::from_findings(
            Vec::new(),
            vec![SchemaFinding::warning(
                DocPath::root().key("Layout"),
                "Layout \"GRID\" is not a standard layout type",
                ids::CODE_NON_STANDARD_LAYOUT,
            )],
        )
    }

    #[test]
    fn warnings_pass_with_warn_verdict_by_default() {
        let report = evaluate(&result_with_layout_warning(), &EffectiveConfig::default());
        assert_eq!(report.verdict, Verdict::Warn);
        assert_eq!(report.counts.warning, 1);
        assert!(report.findings[0].help.is_some());
        assert!(report.findings[0].fingerprint.is_some());
    }

    #[test]
    fn verdict_warn_becomes_fail_when_fail_on_warning() {
        let cfg = EffectiveConfig {
            fail_on: FailOn::Warning,
            ..EffectiveConfig::default()
        };
        let report = evaluate(&result_with_layout_warning(), &cfg);
        assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn disabled_codes_are_dropped_and_overrides_apply() {
        let mut cfg = EffectiveConfig::default();
        cfg.codes.insert(
            ids::CODE_NON_STANDARD_LAYOUT.to_string(),
            CodePolicy::disabled(),
        );
        let report = evaluate(&result_with_layout_warning(), &cfg);
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());

        cfg.codes.insert(
            ids::CODE_NON_STANDARD_LAYOUT.to_string(),
            CodePolicy::with_severity(Severity::Error),
        );
        let report = evaluate(&result_with_layout_warning(), &cfg);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings[0].severity, Severity::Error);
    }

    #[test]
    fn truncation_keeps_totals_and_reason() {
        let errors = (0..5)
            .map(|i| {
                SchemaFinding::error(
                    DocPath::new("Fields").index(i).key("Id"),
                    "Required property 'Id' is missing",
                    ids::CODE_MISSING_REQUIRED_PROPERTY,
                )
            })
            .collect();
        let result = SchemaValidationResult::from_findings(errors, Vec::new());
        let cfg = EffectiveConfig {
            max_findings: 2,
            ..EffectiveConfig::default()
        };

        let report = evaluate(&result, &cfg);
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.data.findings_total, 5);
        assert_eq!(report.data.findings_emitted, 2);
        assert_eq!(
            report.data.truncated_reason.as_deref(),
            Some("findings truncated to max_findings=2")
        );
        assert_eq!(report.findings[1].path.as_str(), "Fields[1].Id");
    }
}
