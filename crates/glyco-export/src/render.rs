//! Markdown rendering of a composed report, the input to the DOCX writer.

use tera::{Context, Tera};

use crate::document::ReportDocument;
use crate::error::ExportError;

const REPORT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// Render a report through the bundled Markdown template. Every
/// [`ReportDocument`] field is available as a template variable.
pub fn render_report(doc: &ReportDocument) -> Result<String, ExportError> {
    let context = Context::from_value(serde_json::to_value(doc)?)?;
    Ok(Tera::one_off(REPORT_TEMPLATE, &context, false)?)
}
