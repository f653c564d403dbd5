use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CalculatorError;

pub const WEIGHT_RANGE_KG: (f64, f64) = (1.0, 300.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 250.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BmiResult {
    /// Unrounded; round to one decimal for display.
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.bmi)
    }
}

/// `weight / (height in metres)²`.
pub fn calculate(input: &BmiInput) -> Result<BmiResult, CalculatorError> {
    check("weight_kg", input.weight_kg, WEIGHT_RANGE_KG)?;
    check("height_cm", input.height_cm, HEIGHT_RANGE_CM)?;

    let height_m = input.height_cm / 100.0;
    let bmi = input.weight_kg / (height_m * height_m);
    Ok(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

fn check(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), CalculatorError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(CalculatorError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
