use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={source},title={code}::{path}: {message}`
///
/// The document path has no line numbers, so it goes into the message.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = String::new();
        let source = report.data.source.as_str();
        if !source.is_empty() && source != "-" {
            meta.push_str(&format!("file={},", escape_property(source)));
        }
        meta.push_str(&format!("title={}", escape_property(&f.code)));

        let message = escape_data(&format!("{}: {}", f.path, f.message));
        out.push(format!("::{} {}::{}", level, meta, message));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
