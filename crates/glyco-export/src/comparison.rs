use serde::{Deserialize, Serialize};
use ts_rs::TS;

use glyco_core::measurement::{Feature, MeasurementSet};
use glyco_core::reference::ReferenceTable;

/// One bar pair in the actual-vs-reference chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonRow {
    pub feature: Feature,
    pub metric: String,
    pub your_value: f64,
    pub optimal_value: f64,
}

impl ComparisonRow {
    pub fn difference(&self) -> f64 {
        self.your_value - self.optimal_value
    }
}

/// Rows for every feature the reference table covers, in table order.
pub fn comparison_rows(measurements: &MeasurementSet, reference: &ReferenceTable) -> Vec<ComparisonRow> {
    reference
        .entries()
        .iter()
        .map(|entry| ComparisonRow {
            feature: entry.feature,
            metric: entry.feature.label().to_string(),
            your_value: measurements.get(entry.feature),
            optimal_value: entry.value,
        })
        .collect()
}
