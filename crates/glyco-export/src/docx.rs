use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use glyco_core::label::RiskLabel;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from the rendered report template.
///
/// The `rendered` content uses a small subset:
/// - `# Heading` / `## Heading` → DOCX Heading 1 / 2
/// - `> text` → risk status line, coloured by `label`
/// - `- item` → bullet list item
/// - `_text_` → italic line (disclaimer)
/// - `**bold**` → bold run, anywhere inline
pub fn generate_docx(
    rendered: &str,
    label: RiskLabel,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let para = if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", styles)
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            status_paragraph(text, label, styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            let bullet = body_run("\u{2022} ", styles);
            inline_runs(text, styles)
                .into_iter()
                .fold(Paragraph::new().add_run(bullet), |p, r| p.add_run(r))
        } else if let Some(text) = trimmed
            .strip_prefix('_')
            .and_then(|t| t.strip_suffix('_'))
        {
            Paragraph::new().add_run(body_run(text, styles).italic().size(styles.body_size * 2 - 4))
        } else {
            inline_runs(trimmed, styles)
                .into_iter()
                .fold(Paragraph::new(), |p, r| p.add_run(r))
        };
        docx = docx.add_paragraph(para.align(AlignmentType::Left));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn status_paragraph(text: &str, label: RiskLabel, styles: &DocumentStyles) -> Paragraph {
    let color = match label {
        RiskLabel::Positive => &styles.alert_color,
        RiskLabel::Negative => &styles.ok_color,
    };
    Paragraph::new().add_run(
        body_run(text, styles)
            .bold()
            .color(color.as_str())
            .size(styles.heading2_size * 2),
    )
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split on `**` markers; odd segments are bold. An unmatched marker leaves
/// the trailing text plain.
fn inline_runs(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let segments: Vec<&str> = text.split("**").collect();
    let balanced = segments.len() % 2 == 1;
    let mut runs = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        let is_last = i == segments.len() - 1;
        let bold = i % 2 == 1 && (balanced || !is_last);
        let run = body_run(segment, styles);
        runs.push(if bold { run.bold() } else { run });
    }
    runs
}
