//! Render use cases: legacy text, Markdown, and GitHub annotations.

use formguard_render::RenderableReport;
use formguard_types::SchemaValidationResult;

pub fn render_text(result: &SchemaValidationResult) -> String {
    formguard_render::render_text(result)
}

pub fn render_markdown(report: &RenderableReport) -> String {
    formguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    formguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}
