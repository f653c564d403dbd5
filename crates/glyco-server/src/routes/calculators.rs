use axum::Json;
use serde::Serialize;

use glyco_calculators::bmi::{self, BmiCategory, BmiInput};
use glyco_calculators::pedigree::{self, GeneticRisk, PedigreeInput};

use crate::error::ApiError;
use crate::extract::JsonBody;

#[derive(Serialize)]
pub struct BmiResponse {
    bmi: f64,
    display: String,
    category: BmiCategory,
    category_label: &'static str,
}

pub async fn calculate_bmi(
    JsonBody(input): JsonBody<BmiInput>,
) -> Result<Json<BmiResponse>, ApiError> {
    let result = bmi::calculate(&input)?;
    Ok(Json(BmiResponse {
        bmi: result.bmi,
        display: result.display_value(),
        category: result.category,
        category_label: result.category.label(),
    }))
}

#[derive(Serialize)]
pub struct PedigreeResponse {
    score: f64,
    display: String,
    risk: GeneticRisk,
    risk_label: &'static str,
}

pub async fn estimate_pedigree(
    JsonBody(input): JsonBody<PedigreeInput>,
) -> Json<PedigreeResponse> {
    let estimate = pedigree::estimate(&input);
    Json(PedigreeResponse {
        score: estimate.score,
        display: format!("{:.2}", estimate.score),
        risk: estimate.risk,
        risk_label: estimate.risk.label(),
    })
}
