use std::sync::Arc;

use glyco_core::label::RiskLabel;
use glyco_core::measurement::MeasurementSet;

use crate::artifacts::Artifacts;
use crate::classifier::Classifier;
use crate::error::ModelError;
use crate::scaler::{NormalizedVector, Scaler};

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub label: RiskLabel,
    /// Positive-class probability, if the classifier exposes one.
    pub probability: Option<f64>,
    pub normalized: NormalizedVector,
}

/// Scales a measurement set and classifies it.
///
/// Holds no mutable state; clone freely and share across threads.
#[derive(Clone)]
pub struct RiskEvaluator {
    scaler: Scaler,
    classifier: Arc<dyn Classifier>,
}

impl RiskEvaluator {
    pub fn new(scaler: Scaler, classifier: Arc<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }

    pub fn from_artifacts(artifacts: Artifacts) -> Self {
        Self::new(artifacts.scaler, artifacts.classifier)
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// No range validation happens here; clamp before calling.
    pub fn evaluate(&self, measurements: &MeasurementSet) -> Evaluation {
        let normalized = self.scaler.transform(measurements);
        let label = self.classifier.predict(&normalized);
        let probability = self.classifier.positive_probability(&normalized);

        tracing::debug!(
            classifier = self.classifier.name(),
            label = ?label,
            probability = ?probability,
            "evaluated measurement set"
        );

        Evaluation {
            label,
            probability,
            normalized,
        }
    }

    /// Evaluate an untyped vector in model column order.
    ///
    /// Wrong arity or non-finite values fail before the scaler runs.
    pub fn evaluate_raw(&self, values: &[f64]) -> Result<Evaluation, ModelError> {
        let measurements = MeasurementSet::from_slice(values)?;
        Ok(self.evaluate(&measurements))
    }
}
