//! The per-submission pipeline: validate, evaluate, compose, export.
//!
//! Runs to completion or fails as a whole; nothing is returned half-built.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use glyco_core::label::RiskLabel;
use glyco_core::measurement::MeasurementSet;
use glyco_core::recommendations::{action_steps, SCREENING_WARNING};
use glyco_core::reference::ReferenceTable;
use glyco_export::comparison::{comparison_rows, ComparisonRow};
use glyco_export::document::{compose, ReportRequest};
use glyco_export::error::ExportError;
use glyco_export::filename::{report_filename, ExportFormat};
use glyco_export::render::render_report;
use glyco_export::styles::{DocumentStyles, PdfStyles};
use glyco_model::evaluator::RiskEvaluator;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("Please enter patient name")]
    EmptyPatientName,

    #[error("report export failed: {0}")]
    Export(#[from] ExportError),
}

/// One form submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRequest {
    pub patient_name: String,
    pub measurements: MeasurementSet,
}

/// A rendered, downloadable report.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    pub patient_name: String,
    pub label: RiskLabel,
    pub probability: Option<f64>,
    /// Measurements after clamping to the form ranges.
    pub measurements: MeasurementSet,
    pub comparison: Vec<ComparisonRow>,
    pub report: ExportedReport,
}

impl ScreeningOutcome {
    pub fn headline(&self) -> String {
        match self.label {
            RiskLabel::Positive => format!("{} is at HIGH RISK for Diabetes", self.patient_name),
            RiskLabel::Negative => format!("{} is at LOW RISK for Diabetes", self.patient_name),
        }
    }

    pub fn action_steps(&self) -> &'static [&'static str] {
        action_steps(self.label)
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.label.is_positive().then_some(SCREENING_WARNING)
    }
}

/// Immutable pipeline shared by every request.
pub struct Screening {
    evaluator: RiskEvaluator,
    reference: ReferenceTable,
    reference_in_report: bool,
    pdf_styles: PdfStyles,
    docx_styles: DocumentStyles,
}

impl Screening {
    pub fn new(evaluator: RiskEvaluator, reference: ReferenceTable, reference_in_report: bool) -> Self {
        Self {
            evaluator,
            reference,
            reference_in_report,
            pdf_styles: PdfStyles::default(),
            docx_styles: DocumentStyles::default(),
        }
    }

    pub fn evaluator(&self) -> &RiskEvaluator {
        &self.evaluator
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    /// Run the full pipeline for one submission.
    ///
    /// A blank patient name is rejected before the evaluator or composer runs.
    pub fn run(
        &self,
        request: &ScreeningRequest,
        format: ExportFormat,
    ) -> Result<ScreeningOutcome, ScreeningError> {
        let patient_name =
            display_name(&request.patient_name).ok_or(ScreeningError::EmptyPatientName)?;

        let measurements = request.measurements.clamped();
        let evaluation = self.evaluator.evaluate(&measurements);

        let report_request = ReportRequest {
            patient_name: patient_name.clone(),
            label: evaluation.label,
            measurements,
            reference: self.reference_in_report.then(|| self.reference.clone()),
            date: jiff::Zoned::now().date(),
        };
        let document = compose(&report_request);

        let bytes = match format {
            ExportFormat::Pdf => glyco_export::pdf::generate_pdf(&document, &self.pdf_styles)?,
            ExportFormat::Docx => {
                let rendered = render_report(&document)?;
                glyco_export::docx::generate_docx(&rendered, document.label, &self.docx_styles)?
            }
        };

        tracing::info!(
            label = ?evaluation.label,
            format = format.extension(),
            report_bytes = bytes.len(),
            "screening completed"
        );

        let filename = report_filename(&patient_name, format);
        Ok(ScreeningOutcome {
            patient_name,
            label: evaluation.label,
            probability: evaluation.probability,
            measurements,
            comparison: comparison_rows(&measurements, &self.reference),
            report: ExportedReport {
                filename,
                mime: format.mime(),
                bytes,
            },
        })
    }
}

/// Single-line form of a patient name as printed in reports.
///
/// Control characters and whitespace runs collapse to one space so the name
/// can never start a new line in the rendered document. `None` when nothing
/// printable remains.
pub fn display_name(raw: &str) -> Option<String> {
    let name = raw
        .split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!name.is_empty()).then_some(name)
}
