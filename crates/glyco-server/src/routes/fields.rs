use axum::extract::State;
use axum::Json;
use serde::Serialize;

use glyco_core::guide::{all_feature_guides, FeatureGuide, DAILY_TIPS};
use glyco_core::measurement::{Feature, FieldSpec};
use glyco_core::reference::ReferenceEntry;

use crate::state::AppState;

#[derive(Serialize)]
pub struct FieldDescriptor {
    feature: Feature,
    label: &'static str,
    unit: Option<&'static str>,
    spec: FieldSpec,
}

#[derive(Serialize)]
pub struct FieldsResponse {
    fields: Vec<FieldDescriptor>,
    reference: Vec<ReferenceEntry>,
}

/// Input definitions for the screening form, in model order.
pub async fn list_fields(State(state): State<AppState>) -> Json<FieldsResponse> {
    let fields = Feature::ALL
        .into_iter()
        .map(|feature| FieldDescriptor {
            feature,
            label: feature.label(),
            unit: feature.unit(),
            spec: feature.spec(),
        })
        .collect();
    Json(FieldsResponse {
        fields,
        reference: state.screening.reference().entries().to_vec(),
    })
}

#[derive(Serialize)]
pub struct GuideResponse {
    features: Vec<FeatureGuide>,
    tips: &'static [&'static str],
}

pub async fn guide() -> Json<GuideResponse> {
    Json(GuideResponse {
        features: all_feature_guides(),
        tips: DAILY_TIPS,
    })
}
