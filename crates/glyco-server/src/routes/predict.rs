use axum::extract::State;
use axum::Json;
use serde::Serialize;

use glyco_core::label::RiskLabel;
use glyco_core::measurement::MeasurementSet;
use glyco_export::comparison::ComparisonRow;
use glyco_export::filename::ExportFormat;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::screening::ScreeningRequest;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PredictResponse {
    pub label: RiskLabel,
    pub headline: String,
    pub risk_level: &'static str,
    pub probability: Option<f64>,
    pub warning: Option<&'static str>,
    pub action_steps: &'static [&'static str],
    pub measurements: MeasurementSet,
    pub comparison: Vec<ComparisonRow>,
    pub report_filename: String,
}

/// Evaluate a submission and return the on-screen result.
pub async fn predict(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ScreeningRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let outcome = state.screening.run(&req, ExportFormat::Pdf)?;

    Ok(Json(PredictResponse {
        label: outcome.label,
        headline: outcome.headline(),
        risk_level: outcome.label.risk_level(),
        probability: outcome.probability,
        warning: outcome.warning(),
        action_steps: outcome.action_steps(),
        measurements: outcome.measurements,
        comparison: outcome.comparison,
        report_filename: outcome.report.filename,
    }))
}
