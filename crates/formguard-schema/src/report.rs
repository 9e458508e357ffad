use formguard_types::{CheckData, Finding, Severity, Verdict, VerdictCounts};

pub fn count_severities(findings: &[Finding]) -> VerdictCounts {
    let mut counts = VerdictCounts::default();
    for f in findings {
        match f.severity {
            Severity::Info => counts.info += 1,
            Severity::Warning => counts.warning += 1,
            Severity::Error => counts.error += 1,
        }
    }
    counts
}

/// Policy-applied outcome of a structural validation run.
#[derive(Clone, Debug)]
pub struct SchemaReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: CheckData,
    pub counts: VerdictCounts,
}
