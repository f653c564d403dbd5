use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Pdf => PDF_MIME,
            ExportFormat::Docx => DOCX_MIME,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

/// Download filename for a patient's report: `Jane Doe` →
/// `Jane_Doe_diabetes_report.pdf`.
///
/// Path separators, quotes and control characters are dropped so the name is
/// safe inside a `Content-Disposition` header.
pub fn report_filename(patient_name: &str, format: ExportFormat) -> String {
    let stem: String = patient_name
        .trim()
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | '"' | ':'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    let stem = if stem.is_empty() { "patient" } else { &stem };
    format!("{stem}_diabetes_report.{}", format.extension())
}
