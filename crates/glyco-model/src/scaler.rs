use serde::{Deserialize, Serialize};

use glyco_core::measurement::{MeasurementSet, FEATURE_COUNT};

/// A measurement set after per-feature affine normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedVector(pub [f64; FEATURE_COUNT]);

impl NormalizedVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// On-disk form of `scaler.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Standard scaler: `(x - mean) / scale` per feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl Scaler {
    /// A zero scale is stored as 1, matching how the scaler was fit.
    pub fn new(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> Self {
        let scale = scale.map(|s| if s == 0.0 { 1.0 } else { s });
        Self { mean, scale }
    }

    /// Validate arity and finiteness of an artifact.
    pub fn from_artifact(artifact: ScalerArtifact) -> Result<Self, String> {
        let mean = fixed_width("mean", &artifact.mean)?;
        let scale = fixed_width("scale", &artifact.scale)?;
        Ok(Self::new(mean, scale))
    }

    pub fn transform(&self, m: &MeasurementSet) -> NormalizedVector {
        let raw = m.to_array();
        NormalizedVector(std::array::from_fn(|i| (raw[i] - self.mean[i]) / self.scale[i]))
    }
}

pub(crate) fn fixed_width(name: &str, values: &[f64]) -> Result<[f64; FEATURE_COUNT], String> {
    let arr: [f64; FEATURE_COUNT] = values
        .try_into()
        .map_err(|_| format!("{name}: expected {FEATURE_COUNT} values, got {}", values.len()))?;
    if arr.iter().any(|v| !v.is_finite()) {
        return Err(format!("{name}: contains a non-finite value"));
    }
    Ok(arr)
}
