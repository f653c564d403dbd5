use serde::Serialize;

use glyco_core::label::RiskLabel;
use glyco_core::measurement::{Feature, MeasurementSet};
use glyco_core::recommendations::{recommendations, DISCLAIMER};
use glyco_core::reference::{FieldStatus, NormalBand, ReferenceTable};

use crate::comparison::{comparison_rows, ComparisonRow};

pub const REPORT_TITLE: &str = "Diabetes Risk Assessment Report";
pub const REPORT_SUBTITLE: &str = "AI-Powered Health Analysis";

/// Everything the composer needs for one report.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Non-empty; the screening layer rejects blank names first.
    pub patient_name: String,
    pub label: RiskLabel,
    pub measurements: MeasurementSet,
    /// When present, an actual-vs-reference table is included.
    pub reference: Option<ReferenceTable>,
    pub date: jiff::civil::Date,
}

/// One line of the metrics listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub feature: Feature,
    pub label: String,
    pub value: String,
    pub normal_range: String,
    pub status: FieldStatus,
}

/// Format-independent content of a screening report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: String,
    pub patient_name: String,
    pub date: String,
    pub label: RiskLabel,
    pub status_text: String,
    pub metrics: Vec<MetricRow>,
    pub comparison: Option<Vec<ComparisonRow>>,
    pub recommendations: Vec<String>,
    pub disclaimer: Vec<String>,
}

/// Build the report content. Pure; rendering happens in [`crate::pdf`] or
/// [`crate::render`].
pub fn compose(request: &ReportRequest) -> ReportDocument {
    let metrics = Feature::ALL
        .into_iter()
        .map(|feature| {
            let value = request.measurements.get(feature);
            let band = NormalBand::for_feature(feature);
            MetricRow {
                feature,
                label: feature.label().to_string(),
                value: format_value(feature, value),
                normal_range: band.description.to_string(),
                status: band.status(value),
            }
        })
        .collect();

    let comparison = request
        .reference
        .as_ref()
        .map(|table| comparison_rows(&request.measurements, table));

    ReportDocument {
        title: REPORT_TITLE.to_string(),
        subtitle: REPORT_SUBTITLE.to_string(),
        patient_name: request.patient_name.clone(),
        date: request.date.strftime("%B %d, %Y").to_string(),
        label: request.label,
        status_text: request.label.to_string(),
        metrics,
        comparison,
        recommendations: recommendations(request.label)
            .iter()
            .map(|r| r.to_string())
            .collect(),
        disclaimer: DISCLAIMER.iter().map(|d| d.to_string()).collect(),
    }
}

/// Counts print as integers, everything else with two decimals.
pub fn format_value(feature: Feature, value: f64) -> String {
    if feature.is_integer() {
        format!("{}", value.trunc() as i64)
    } else {
        format!("{value:.2}")
    }
}
