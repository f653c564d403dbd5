//! Static reference content for the info and tips pages.

use serde::Serialize;

use crate::measurement::Feature;

#[derive(Debug, Clone, Serialize)]
pub struct FeatureGuide {
    pub feature: Feature,
    pub meaning: &'static str,
    pub ranges: &'static [&'static str],
    pub note: &'static str,
}

pub fn feature_guide(feature: Feature) -> FeatureGuide {
    let (meaning, ranges, note): (&str, &[&str], &str) = match feature {
        Feature::Pregnancies => (
            "Total number of times you've been pregnant",
            &["Typical: 0-15 (most women have 0-5)"],
            "Higher pregnancies can increase diabetes risk due to gestational diabetes history",
        ),
        Feature::Glucose => (
            "Plasma glucose concentration",
            &[
                "Normal (fasting): 70-99 mg/dL",
                "Pre-diabetic: 100-125 mg/dL",
                "Diabetic: 126+ mg/dL",
                "After eating: up to 140-180 mg/dL",
            ],
            "The most important diabetes indicator",
        ),
        Feature::BloodPressure => (
            "Diastolic blood pressure (the lower number, as in 120/80)",
            &["Normal: 60-80 mmHg", "Elevated: 80-89 mmHg", "High: 90+ mmHg"],
            "People with diabetes often have high blood pressure too",
        ),
        Feature::SkinThickness => (
            "Triceps skin fold thickness, an estimate of body fat",
            &["Typical: 10-50 mm", "Average for women: 20-30 mm"],
            "Higher values suggest obesity",
        ),
        Feature::Insulin => (
            "Serum insulin level",
            &["Normal (fasting): 2.6-24.9 µU/mL", "Normal (after eating): 16-166 µU/mL"],
            "Diabetics may have very high or very low insulin levels",
        ),
        Feature::Bmi => (
            "Weight relative to height: kg / m²",
            &[
                "Underweight: below 18.5",
                "Normal weight: 18.5-24.9",
                "Overweight: 25.0-29.9",
                "Obese: 30.0-39.9",
                "Severely obese: 40+",
            ],
            "Higher BMI greatly increases diabetes risk",
        ),
        Feature::DiabetesPedigree => (
            "A score of genetic risk based on family diabetes history",
            &[
                "Typical: 0.08-2.5",
                "Low risk: 0.08-0.5",
                "Medium risk: 0.5-1.0",
                "High risk: 1.0+",
            ],
            "Use the pedigree estimator if you know your family history",
        ),
        Feature::Age => (
            "Current age in years",
            &["Common: 1-120", "Higher risk: 45 and above"],
            "Risk of type 2 diabetes increases significantly after 45",
        ),
    };
    FeatureGuide {
        feature,
        meaning,
        ranges,
        note,
    }
}

pub fn all_feature_guides() -> Vec<FeatureGuide> {
    Feature::ALL.into_iter().map(feature_guide).collect()
}

pub const DAILY_TIPS: &[&str] = &[
    "Exercise: walk for 30-45 minutes daily",
    "Diet: eat high-fiber foods, vegetables, and fruits",
    "Hydration: drink 8-10 glasses of water daily",
    "Avoid: smoking, alcohol, sugary drinks",
    "Sugar: cut down on sweets and processed foods",
    "Sleep: get 7-8 hours of quality sleep",
    "Check-ups: regular health monitoring and blood tests",
    "Stress: practice meditation or yoga daily",
];
