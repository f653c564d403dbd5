use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Score with no family history.
pub const BASE_SCORE: f64 = 0.08;

/// Upper bound of the estimate.
pub const MAX_SCORE: f64 = 2.5;

pub const SIBLING_WEIGHT: f64 = 0.15;

pub const MAX_SIBLINGS: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ParentHistory {
    None,
    OneParent,
    BothParents,
}

impl ParentHistory {
    pub const ALL: [ParentHistory; 3] = [
        ParentHistory::None,
        ParentHistory::OneParent,
        ParentHistory::BothParents,
    ];

    fn weight(self) -> f64 {
        match self {
            ParentHistory::None => 0.0,
            ParentHistory::OneParent => 0.4,
            ParentHistory::BothParents => 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GrandparentHistory {
    None,
    One,
    TwoOrMore,
}

impl GrandparentHistory {
    pub const ALL: [GrandparentHistory; 3] = [
        GrandparentHistory::None,
        GrandparentHistory::One,
        GrandparentHistory::TwoOrMore,
    ];

    fn weight(self) -> f64 {
        match self {
            GrandparentHistory::None => 0.0,
            GrandparentHistory::One => 0.1,
            GrandparentHistory::TwoOrMore => 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PedigreeInput {
    pub parents: ParentHistory,
    /// Siblings with diabetes; values above [`MAX_SIBLINGS`] are clamped.
    pub siblings: u8,
    pub grandparents: GrandparentHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GeneticRisk {
    Low,
    Medium,
    High,
}

impl GeneticRisk {
    pub fn from_score(score: f64) -> Self {
        if score < 0.5 {
            GeneticRisk::Low
        } else if score < 1.0 {
            GeneticRisk::Medium
        } else {
            GeneticRisk::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GeneticRisk::Low => "Low genetic risk",
            GeneticRisk::Medium => "Medium genetic risk",
            GeneticRisk::High => "High genetic risk",
        }
    }
}

impl fmt::Display for GeneticRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PedigreeEstimate {
    pub score: f64,
    pub risk: GeneticRisk,
}

/// Additive family-history heuristic, capped at [`MAX_SCORE`].
pub fn estimate(input: &PedigreeInput) -> PedigreeEstimate {
    let siblings = input.siblings.min(MAX_SIBLINGS);
    let raw = BASE_SCORE
        + input.parents.weight()
        + f64::from(siblings) * SIBLING_WEIGHT
        + input.grandparents.weight();
    let score = raw.min(MAX_SCORE);
    PedigreeEstimate {
        score,
        risk: GeneticRisk::from_score(score),
    }
}
