use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::measurement::Feature;

/// Whether a measurement sits inside its documented normal band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldStatus {
    Normal,
    OutOfRange,
}

/// Documented "normal" band for a feature, used for status marks only.
/// The classifier never sees these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalBand {
    pub feature: Feature,
    pub description: &'static str,
    lower: Bound,
    upper: Bound,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

impl NormalBand {
    pub fn for_feature(feature: Feature) -> Self {
        use Bound::*;
        let (description, lower, upper) = match feature {
            Feature::Pregnancies => ("0-5 typical", Unbounded, Inclusive(5.0)),
            Feature::Glucose => ("70-99 mg/dL normal", Inclusive(70.0), Exclusive(100.0)),
            Feature::BloodPressure => ("60-80 mmHg normal", Inclusive(60.0), Inclusive(80.0)),
            Feature::SkinThickness => ("20-30 mm average", Inclusive(20.0), Inclusive(30.0)),
            Feature::Insulin => ("2.6-25 µU/mL fasting", Inclusive(2.6), Inclusive(25.0)),
            Feature::Bmi => ("18.5-24.9 normal", Inclusive(18.5), Exclusive(25.0)),
            Feature::DiabetesPedigree => ("< 0.5 low risk", Unbounded, Exclusive(0.5)),
            Feature::Age => ("< 45 lower risk", Unbounded, Exclusive(45.0)),
        };
        Self {
            feature,
            description,
            lower,
            upper,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        // Counts are compared on their integer part.
        let value = if self.feature.is_integer() {
            value.trunc()
        } else {
            value
        };
        let above = match self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(min) => value >= min,
            Bound::Exclusive(min) => value > min,
        };
        let below = match self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(max) => value <= max,
            Bound::Exclusive(max) => value < max,
        };
        above && below
    }

    pub fn status(&self, value: f64) -> FieldStatus {
        if self.contains(value) {
            FieldStatus::Normal
        } else {
            FieldStatus::OutOfRange
        }
    }
}

/// Canonical "healthy" values for the comparison chart.
///
/// Deployed variants disagreed here (blood pressure 75 vs 80, BMI 22 vs 24);
/// this table is the single source and may be overridden through config.
pub const CANONICAL_REFERENCE: [(Feature, f64); 4] = [
    (Feature::Glucose, 85.0),
    (Feature::BloodPressure, 75.0),
    (Feature::Bmi, 22.0),
    (Feature::Insulin, 80.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceEntry {
    pub feature: Feature,
    pub value: f64,
}

/// Ordered mapping from a subset of features to a reference value.
/// Display only; not part of the model decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    pub fn canonical() -> Self {
        Self::from_pairs(CANONICAL_REFERENCE)
    }

    /// Build from pairs; a feature listed twice keeps its last value at the
    /// position of its first appearance.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Feature, f64)>) -> Self {
        let mut entries: Vec<ReferenceEntry> = Vec::new();
        for (feature, value) in pairs {
            match entries.iter_mut().find(|e| e.feature == feature) {
                Some(existing) => existing.value = value,
                None => entries.push(ReferenceEntry { feature, value }),
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn reference(&self, feature: Feature) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.feature == feature)
            .map(|e| e.value)
    }

    /// Copy with the given overrides applied on top.
    pub fn with_overrides(&self, overrides: &[ReferenceEntry]) -> Self {
        Self::from_pairs(
            self.entries
                .iter()
                .chain(overrides)
                .map(|e| (e.feature, e.value)),
        )
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::canonical()
    }
}
