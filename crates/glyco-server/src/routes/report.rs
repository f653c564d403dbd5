use axum::extract::{Query, State};
use axum::http::header::{self, HeaderValue};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use glyco_export::filename::ExportFormat;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::screening::ScreeningRequest;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// Evaluate a submission and return the report as a download.
pub async fn download_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
    JsonBody(req): JsonBody<ScreeningRequest>,
) -> Result<Response, ApiError> {
    let outcome = state.screening.run(&req, query.format)?;
    let report = outcome.report;

    let disposition =
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", report.filename))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(report.mime)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.bytes,
    )
        .into_response())
}
