//! CLI entry point for formguard.
//!
//! This module stays thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `formguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use formguard_app::{
    CheckInput, EvaluateInput, ExplainOutput, parse_report_json, render_annotations,
    render_markdown, render_text, run_check, run_evaluate, run_explain, runtime_error_report,
    serialize_report, to_renderable, verdict_exit_code,
};
use formguard_settings::Overrides;
use formguard_types::FormguardReport;
use std::io::Read;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Stand-in path meaning "read from stdin".
const STDIN: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "formguard",
    version,
    about = "Validate form-builder definitions and evaluate their conditional logic"
)]
struct Cli {
    /// Path to formguard config TOML (a missing file means defaults).
    #[arg(long, default_value = "formguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict|lenient).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Override the failing severity (error|warning).
    #[arg(long)]
    fail_on: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Legacy plain-text report.
    Text,
    /// The JSON report envelope.
    Json,
    /// Markdown summary.
    Md,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Structurally validate a form definition.
    Check {
        /// Form definition JSON file, or `-` for stdin.
        input: Utf8PathBuf,

        /// What to print on stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the JSON report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Also write a Markdown report here.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Run business validation and enablement for a form against field values.
    Eval {
        /// Form definition JSON file, or `-` for stdin.
        form: Utf8PathBuf,

        /// JSON object of field values keyed by field id.
        #[arg(long)]
        values: Option<Utf8PathBuf>,

        /// Only validate this field.
        #[arg(long)]
        field: Option<String>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a finding code with remediation guidance.
    Explain {
        /// The code to explain (e.g. "INVALID_MENU_ID").
        code: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.cmd {
        Commands::Check {
            input,
            format,
            report_out,
            markdown_out,
        } => cmd_check(&cli, input, *format, report_out.as_deref(), markdown_out.as_deref()),
        Commands::Eval {
            form,
            values,
            field,
        } => cmd_eval(form, values.as_deref(), field.as_deref()),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { code } => cmd_explain(code),
    }
}

/// Diagnostics go to stderr, filtered by `FORMGUARD_LOG` (default `warn`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FORMGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_check(
    cli: &Cli,
    input: &Utf8Path,
    format: OutputFormat,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let document = read_input(input)?;
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let output = run_check(CheckInput {
            source: input.as_str(),
            document: &document,
            config_text: &cfg_text,
            overrides: overrides(cli),
        })?;

        if let Some(path) = report_out {
            write_report_file(path, &output.report).context("write report json")?;
        }
        if let Some(path) = markdown_out {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(path, &md).context("write markdown")?;
        }

        match format {
            OutputFormat::Text => print!("{}", render_text(&output.result)),
            OutputFormat::Json => {
                let data = serialize_report(&output.report)?;
                println!("{}", String::from_utf8_lossy(&data));
            }
            OutputFormat::Md => print!("{}", render_markdown(&to_renderable(&output.report))),
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = report_out {
                let report = runtime_error_report(input.as_str(), &format!("{err:#}"));
                let _ = write_report_file(path, &report);
            }
            eprintln!("formguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        fail_on: cli.fail_on.clone(),
        max_findings: cli.max_findings,
    }
}

fn cmd_eval(form: &Utf8Path, values: Option<&Utf8Path>, field: Option<&str>) -> anyhow::Result<()> {
    let form_text = read_input(form)?;
    let values_text = values
        .map(|path| {
            std::fs::read_to_string(path).with_context(|| format!("read values: {}", path))
        })
        .transpose()?;

    let output = run_evaluate(EvaluateInput {
        form: &form_text,
        values: values_text.as_deref(),
        field,
    })?;

    let json = serde_json::to_string_pretty(&output).context("serialize evaluation")?;
    println!("{}", json);

    if !output.is_valid() {
        std::process::exit(2);
    }
    Ok(())
}

fn read_input(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read input: {}", path))
}

fn write_report_file(path: &Utf8Path, report: &FormguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report).context("serialize report")?;
    write_bytes(path, &data)
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let annotations = render_annotations(&to_renderable(&report), max);

    for annotation in annotations {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(code: &str) -> anyhow::Result<()> {
    match run_explain(code) {
        ExplainOutput::Found(exp) => {
            print!("{}", formguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!(
                "{}",
                formguard_app::format_not_found(&identifier, &available_codes)
            );
            std::process::exit(1);
        }
    }
}
