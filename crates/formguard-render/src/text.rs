use formguard_types::{SchemaFinding, SchemaValidationResult};

/// Plain-text report in the format form authors already know.
///
/// A valid document renders as a single success line, even when it has warnings.
pub fn render_text(result: &SchemaValidationResult) -> String {
    if result.is_valid {
        return "✅ JSON Schema is valid!\n".to_string();
    }

    let mut out = String::new();

    if !result.errors.is_empty() {
        out.push_str("🔴 ERRORS:\n");
        push_lines(&mut out, &result.errors);
        out.push('\n');
    }

    if !result.warnings.is_empty() {
        out.push_str("🟡 WARNINGS:\n");
        push_lines(&mut out, &result.warnings);
    }

    out
}

fn push_lines(out: &mut String, findings: &[SchemaFinding]) {
    for f in findings {
        out.push_str(&format!("  • {}: {} ({})\n", f.path, f.message, f.code));
    }
}
