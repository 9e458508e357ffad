use crate::{model::FormguardConfigV1, presets};
use anyhow::Context;
use formguard_schema::policy::{CodePolicy, EffectiveConfig, FailOn};
use formguard_types::{Severity, lookup_explanation};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: FormguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-code overrides
    for (code, cc) in cfg.codes.iter() {
        if lookup_explanation(code).is_none() {
            anyhow::bail!("unknown finding code in [codes]: {code}");
        }

        let entry = effective
            .codes
            .entry(code.clone())
            .or_insert(CodePolicy {
                enabled: true,
                severity: None,
            });

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                Some(parse_severity(sev).with_context(|| format!("invalid severity for {code}"))?);
        }
    }

    // fail_on: command line beats config beats preset
    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use formguard_types::ids;

    #[test]
    fn empty_config_resolves_to_default_profile() {
        let resolved = resolve_config(FormguardConfigV1::default(), Overrides::default())
            .expect("resolve");
        assert_eq!(resolved.effective.profile, "default");
        assert_eq!(resolved.effective.fail_on, FailOn::Error);
        assert_eq!(resolved.effective.max_findings, 200);
        assert!(resolved.effective.codes.is_empty());
    }

    #[test]
    fn config_file_overrides_apply() {
        let cfg = parse_config_toml(
            r#"
schema = "formguard.config.v1"
profile = "lenient"
max_findings = 10
fail_on = "warning"

[codes.NON_STANDARD_LAYOUT]
enabled = false

[codes.MISSING_ACTION_LABEL]
severity = "warning"
"#,
        )
        .expect("parse");

        let eff = resolve_config(cfg, Overrides::default())
            .expect("resolve")
            .effective;
        assert_eq!(eff.profile, "lenient");
        assert_eq!(eff.max_findings, 10);
        assert_eq!(eff.fail_on, FailOn::Warning);
        assert!(!eff.is_enabled(ids::CODE_NON_STANDARD_LAYOUT));
        assert_eq!(
            eff.effective_severity(ids::CODE_MISSING_ACTION_LABEL, Severity::Error),
            Some(Severity::Warning)
        );
        // Preset entries not mentioned in the file survive.
        assert_eq!(
            eff.effective_severity(ids::CODE_INVALID_MENU_ID, Severity::Error),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn command_line_beats_config() {
        let cfg = FormguardConfigV1 {
            profile: Some("lenient".to_string()),
            fail_on: Some("error".to_string()),
            max_findings: Some(5),
            ..FormguardConfigV1::default()
        };
        let overrides = Overrides {
            profile: Some("strict".to_string()),
            fail_on: Some("warning".to_string()),
            max_findings: Some(1),
        };
        let eff = resolve_config(cfg, overrides).expect("resolve").effective;
        assert_eq!(eff.profile, "strict");
        assert_eq!(eff.fail_on, FailOn::Warning);
        assert_eq!(eff.max_findings, 1);
    }

    #[test]
    fn rejects_unknown_values() {
        let unknown_profile = FormguardConfigV1 {
            profile: Some("paranoid".to_string()),
            ..FormguardConfigV1::default()
        };
        let err = resolve_config(unknown_profile, Overrides::default()).expect_err("profile");
        assert!(err.to_string().contains("unknown profile"));

        let bad_code = parse_config_toml("[codes.NOT_A_CODE]\nenabled = false\n").expect("parse");
        assert!(resolve_config(bad_code, Overrides::default()).is_err());

        let bad_sev =
            parse_config_toml("[codes.INVALID_JSON]\nseverity = \"fatal\"\n").expect("parse");
        let err = resolve_config(bad_sev, Overrides::default()).expect_err("severity");
        assert!(format!("{err:#}").contains("unknown severity"));

        let bad_fail_on = Overrides {
            fail_on: Some("never".to_string()),
            ..Overrides::default()
        };
        assert!(resolve_config(FormguardConfigV1::default(), bad_fail_on).is_err());
    }

    #[test]
    fn every_profile_resolves() {
        for profile in presets::PROFILES {
            let overrides = Overrides {
                profile: Some(profile.to_string()),
                ..Overrides::default()
            };
            let eff = resolve_config(FormguardConfigV1::default(), overrides)
                .expect("resolve")
                .effective;
            assert_eq!(eff.profile, *profile);
        }
    }
}
