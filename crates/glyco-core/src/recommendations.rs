//! Fixed advice lists keyed by risk label.

use crate::label::RiskLabel;

const POSITIVE_RECOMMENDATIONS: &[&str] = &[
    "Consult a healthcare provider immediately for proper diagnosis",
    "Monitor blood glucose levels regularly",
    "Follow a balanced, low-sugar diet rich in vegetables",
    "Exercise for at least 30-45 minutes daily (walking, cycling)",
    "Maintain a healthy weight (target BMI: 18.5-24.9)",
    "Stay hydrated - drink 8-10 glasses of water daily",
    "Get 7-8 hours of quality sleep each night",
    "Avoid processed foods, sugary drinks, and excessive carbs",
    "Schedule regular check-ups and blood tests",
];

const NEGATIVE_RECOMMENDATIONS: &[&str] = &[
    "Continue maintaining a healthy lifestyle",
    "Eat a balanced diet with fruits, vegetables, and whole grains",
    "Exercise regularly - at least 150 minutes per week",
    "Keep your weight in the healthy BMI range",
    "Limit sugar and processed food intake",
    "Stay hydrated throughout the day",
    "Get annual health check-ups",
    "Monitor any family history of diabetes",
];

const POSITIVE_ACTION_STEPS: &[&str] = &[
    "Schedule a doctor's appointment for proper diagnosis",
    "Get a blood test (HbA1c and fasting glucose)",
    "Start eating healthy - more vegetables, less sugar",
    "Walk 30-45 minutes daily",
    "Drink 8-10 glasses of water daily",
    "Avoid sugar, junk food, and sodas",
    "Get 7-8 hours of sleep",
    "Monitor your blood sugar regularly",
];

const NEGATIVE_ACTION_STEPS: &[&str] = &[
    "Continue balanced diet",
    "Regular exercise (150 min/week)",
    "Stay hydrated",
    "Limit sugar intake",
    "Annual health check-ups",
];

/// Recommendation list printed in the report.
pub fn recommendations(label: RiskLabel) -> &'static [&'static str] {
    match label {
        RiskLabel::Positive => POSITIVE_RECOMMENDATIONS,
        RiskLabel::Negative => NEGATIVE_RECOMMENDATIONS,
    }
}

/// Shorter list shown next to the on-screen verdict.
pub fn action_steps(label: RiskLabel) -> &'static [&'static str] {
    match label {
        RiskLabel::Positive => POSITIVE_ACTION_STEPS,
        RiskLabel::Negative => NEGATIVE_ACTION_STEPS,
    }
}

/// Warning shown with a positive verdict.
pub const SCREENING_WARNING: &str =
    "This is a screening tool, NOT a diagnosis. Please consult a doctor immediately.";

pub const DISCLAIMER: [&str; 2] = [
    "Disclaimer: This is an AI-based screening tool and NOT a medical diagnosis.",
    "Please consult a qualified healthcare professional for proper medical advice and treatment.",
];
