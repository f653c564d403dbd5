use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Binary classifier outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLabel {
    Negative,
    Positive,
}

impl RiskLabel {
    /// Map a class index (0 = negative, anything else = positive).
    pub fn from_class(class: u8) -> Self {
        if class == 0 {
            RiskLabel::Negative
        } else {
            RiskLabel::Positive
        }
    }

    pub fn class(self) -> u8 {
        match self {
            RiskLabel::Negative => 0,
            RiskLabel::Positive => 1,
        }
    }

    pub fn is_positive(self) -> bool {
        self == RiskLabel::Positive
    }

    /// Short on-screen verdict.
    pub fn headline(self) -> &'static str {
        match self {
            RiskLabel::Negative => "Not Diabetic",
            RiskLabel::Positive => "Likely Diabetic",
        }
    }

    pub fn risk_level(self) -> &'static str {
        match self {
            RiskLabel::Negative => "LOW RISK",
            RiskLabel::Positive => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.risk_level(), self.headline())
    }
}
