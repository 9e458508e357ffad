use formguard_schema::policy::{CodePolicy, EffectiveConfig, FailOn};
use formguard_types::{Severity, ids};
use std::collections::BTreeMap;

pub const PROFILES: &[&str] = &["default", "strict", "lenient"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into the config file.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "default" => Some(default_profile()),
        "strict" => Some(strict_profile()),
        "lenient" => Some(lenient_profile()),
        _ => None,
    }
}

fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "default".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        codes: BTreeMap::new(),
    }
}

/// Warnings fail the run.
fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Warning,
        ..default_profile()
    }
}

/// Cosmetic problems are demoted so only broken documents fail.
fn lenient_profile() -> EffectiveConfig {
    let mut codes = BTreeMap::new();
    for code in [
        ids::CODE_INVALID_FIELD_ID,
        ids::CODE_INVALID_WIDTH_FORMAT,
        ids::CODE_INVALID_FORM_WIDTH,
        ids::CODE_INVALID_MENU_ID,
    ] {
        codes.insert(code.to_string(), CodePolicy::with_severity(Severity::Warning));
    }
    for code in [
        ids::CODE_NON_STANDARD_LAYOUT,
        ids::CODE_NON_STANDARD_FIELD_TYPE,
        ids::CODE_NON_STANDARD_OPERATOR,
        ids::CODE_NON_STANDARD_VALUE_TYPE,
    ] {
        codes.insert(code.to_string(), CodePolicy::with_severity(Severity::Info));
    }

    EffectiveConfig {
        profile: "lenient".to_string(),
        codes,
        ..default_profile()
    }
}
