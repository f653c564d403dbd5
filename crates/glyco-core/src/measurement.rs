use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Number of model inputs.
pub const FEATURE_COUNT: usize = 8;

/// One of the eight physiological measurements, in model column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Feature {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigree,
    Age,
}

impl Feature {
    /// All features in the order the scaler and classifier expect.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Pregnancies,
        Feature::Glucose,
        Feature::BloodPressure,
        Feature::SkinThickness,
        Feature::Insulin,
        Feature::Bmi,
        Feature::DiabetesPedigree,
        Feature::Age,
    ];

    /// Column index in the model input vector.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Feature::Pregnancies => "pregnancies",
            Feature::Glucose => "glucose",
            Feature::BloodPressure => "blood_pressure",
            Feature::SkinThickness => "skin_thickness",
            Feature::Insulin => "insulin",
            Feature::Bmi => "bmi",
            Feature::DiabetesPedigree => "diabetes_pedigree",
            Feature::Age => "age",
        }
    }

    /// Human-readable name used in reports and charts.
    pub fn label(self) -> &'static str {
        match self {
            Feature::Pregnancies => "Pregnancies",
            Feature::Glucose => "Glucose",
            Feature::BloodPressure => "Blood Pressure",
            Feature::SkinThickness => "Skin Thickness",
            Feature::Insulin => "Insulin",
            Feature::Bmi => "BMI",
            Feature::DiabetesPedigree => "Diabetes Pedigree",
            Feature::Age => "Age",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Feature::Glucose => Some("mg/dL"),
            Feature::BloodPressure => Some("mmHg"),
            Feature::SkinThickness => Some("mm"),
            Feature::Insulin => Some("µU/mL"),
            Feature::Age => Some("years"),
            Feature::Pregnancies | Feature::Bmi | Feature::DiabetesPedigree => None,
        }
    }

    /// Input control definition for this feature.
    pub fn spec(self) -> FieldSpec {
        match self {
            Feature::Pregnancies => FieldSpec::integer(0.0, 20.0, 1.0),
            Feature::Glucose => FieldSpec::decimal(0.0, 300.0, 100.0, 1.0),
            Feature::BloodPressure => FieldSpec::decimal(0.0, 200.0, 72.0, 1.0),
            Feature::SkinThickness => FieldSpec::decimal(0.0, 100.0, 20.0, 1.0),
            Feature::Insulin => FieldSpec::decimal(0.0, 900.0, 80.0, 1.0),
            Feature::Bmi => FieldSpec::decimal(0.0, 70.0, 25.0, 0.1),
            Feature::DiabetesPedigree => FieldSpec::decimal(0.0, 3.0, 0.3, 0.01),
            Feature::Age => FieldSpec::integer(1.0, 120.0, 30.0),
        }
    }

    /// Whether the value is a count and should be shown without decimals.
    pub fn is_integer(self) -> bool {
        self.spec().integer
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Feature {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| CoreError::UnknownFeature(s.to_string()))
    }
}

/// Declared bounds, default and step of a form input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    pub integer: bool,
}

impl FieldSpec {
    const fn integer(min: f64, max: f64, default: f64) -> Self {
        Self {
            min,
            max,
            default,
            step: 1.0,
            integer: true,
        }
    }

    const fn decimal(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max,
            default,
            step,
            integer: false,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into `[min, max]`; integer fields are also rounded.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if self.integer { value.round() } else { value };
        value.clamp(self.min, self.max)
    }
}

/// The eight raw measurements for one submission.
///
/// The evaluator performs no range validation; callers clamp with
/// [`MeasurementSet::clamped`] first. Every field is required on the wire;
/// [`Default`] holds the form's initial values only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct MeasurementSet {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: f64,
}

impl MeasurementSet {
    /// Values in model column order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.pregnancies,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.diabetes_pedigree,
            self.age,
        ]
    }

    /// Build from a raw vector in model column order.
    ///
    /// Fails on wrong arity or any non-finite value.
    pub fn from_slice(values: &[f64]) -> Result<Self, CoreError> {
        if values.len() != FEATURE_COUNT {
            return Err(CoreError::InvalidInput(format!(
                "expected {FEATURE_COUNT} measurements, got {}",
                values.len()
            )));
        }
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "{} is not a finite number: {v}",
                Feature::ALL[i].label()
            )));
        }

        Ok(Self {
            pregnancies: values[0],
            glucose: values[1],
            blood_pressure: values[2],
            skin_thickness: values[3],
            insulin: values[4],
            bmi: values[5],
            diabetes_pedigree: values[6],
            age: values[7],
        })
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.to_array()[feature.index()]
    }

    /// Copy with every field clamped to its declared input range.
    pub fn clamped(&self) -> Self {
        let mut values = self.to_array();
        for feature in Feature::ALL {
            let v = &mut values[feature.index()];
            *v = feature.spec().clamp(*v);
        }
        Self::from_array(values)
    }

    /// Names of features outside their declared range.
    pub fn out_of_range(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| !f.spec().contains(self.get(*f)))
            .collect()
    }

    fn from_array(v: [f64; FEATURE_COUNT]) -> Self {
        Self {
            pregnancies: v[0],
            glucose: v[1],
            blood_pressure: v[2],
            skin_thickness: v[3],
            insulin: v[4],
            bmi: v[5],
            diabetes_pedigree: v[6],
            age: v[7],
        }
    }
}

impl Default for MeasurementSet {
    fn default() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for feature in Feature::ALL {
            values[feature.index()] = feature.spec().default;
        }
        Self::from_array(values)
    }
}
