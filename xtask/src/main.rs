//! Developer tasks (schema generation, conformance, explain coverage).
//!
//! Kept separate from the end-user CLI.

use anyhow::{Context, bail};
use formguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(formguard_types::FormguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(formguard_settings::FormguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "formguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "formguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Check fixture reports against the report schema and hygiene rules");
    eprintln!("  explain-coverage  Validate all codes have explanations");
}

/// Finding paths are dotted document paths rooted at `root`, `Fields`, or `Actions`.
fn is_document_path(path: &str) -> bool {
    path == "root"
        || path.starts_with("root.")
        || path.starts_with("Fields[")
        || path.starts_with("Actions[")
}

/// Run every fixture in `tests/fixtures/` through the check use case and verify:
///
/// 1. Schema validation: the report validates against the generated report schema
/// 2. Path hygiene: every finding path is a rooted document path
/// 3. Code hygiene: every finding code has an explanation
/// 4. Golden files: `expected.report.json` matches, when present
fn conform() -> anyhow::Result<()> {
    let mut schema_value = serde_json::to_value(generate_report_schema())
        .context("Failed to serialize report schema")?;
    if let Some(obj) = schema_value.as_object_mut() {
        obj.remove("$id");
    }
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let dir = fixtures_dir()?;
    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.join("form.json").is_file())
        .collect();
    entries.sort();

    let mut errors = Vec::new();
    for fixture_dir in &entries {
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let document = fs::read_to_string(fixture_dir.join("form.json"))
            .with_context(|| format!("Failed to read fixture '{}'", name))?;

        let output = formguard_app::run_check(formguard_app::CheckInput {
            source: "form.json",
            document: &document,
            config_text: "",
            overrides: formguard_settings::Overrides::default(),
        })
        .with_context(|| format!("check failed on fixture '{}'", name))?;

        let bytes = formguard_app::serialize_report(&output.report)?;
        let report: serde_json::Value = serde_json::from_slice(&bytes)?;

        for err in compiled.iter_errors(&report) {
            errors.push(format!("fixture '{}': schema validation: {}", name, err));
        }

        for finding in &output.report.findings {
            if !is_document_path(finding.path.as_str()) {
                errors.push(format!(
                    "fixture '{}': unrooted finding path '{}'",
                    name,
                    finding.path.as_str()
                ));
            }
            if formguard_types::lookup_explanation(&finding.code).is_none() {
                errors.push(format!(
                    "fixture '{}': code '{}' has no explanation",
                    name, finding.code
                ));
            }
        }

        let golden_path = fixture_dir.join("expected.report.json");
        if golden_path.exists() {
            let golden: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&golden_path)?)?;
            if normalize_nondeterministic(report) != normalize_nondeterministic(golden) {
                errors.push(format!(
                    "fixture '{}': output differs from golden file expected.report.json",
                    name
                ));
                continue;
            }
            println!("  ✓ fixture '{}' matches golden report", name);
        } else {
            println!("  ✓ fixture '{}' produces a valid report", name);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ Conformance checks passed for {} fixtures!", entries.len());
    Ok(())
}

/// Validate that all codes have complete explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let codes = formguard_types::explain::all_codes();
    let mut errors = Vec::new();

    for code in &codes {
        match formguard_types::lookup_explanation(code) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Code '{}' has empty title", code));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Code '{}' has empty description", code));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Code '{}' has empty remediation", code));
                }
                if exp.examples.before.is_empty() || exp.examples.after.is_empty() {
                    errors.push(format!("Code '{}' is missing an example", code));
                }
            }
            None => {
                errors.push(format!("Code '{}' has no explanation", code));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", formguard_types::SCHEMA_REPORT_V1);
            println!("{}", formguard_settings::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
