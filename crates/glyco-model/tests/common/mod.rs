#![allow(dead_code)]

use std::path::Path;

pub const SCALER_JSON: &str = r#"{
  "mean": [3.8, 120.9, 69.1, 20.5, 79.8, 32.0, 0.47, 33.2],
  "scale": [3.4, 32.0, 19.3, 15.9, 115.2, 7.9, 0.33, 11.8]
}"#;

pub const LOGISTIC_JSON: &str = r#"{
  "kind": "logistic",
  "coefficients": [0.39, 1.10, -0.25, 0.01, -0.14, 0.70, 0.30, 0.17],
  "intercept": -0.87
}"#;

/// Two stumps on glucose (column 1) and BMI (column 5).
pub const FOREST_JSON: &str = r#"{
  "kind": "random_forest",
  "trees": [
    { "nodes": [
        { "feature": 1, "threshold": 0.5, "left": 1, "right": 2 },
        { "value": [90.0, 10.0] },
        { "value": [20.0, 80.0] }
    ] },
    { "nodes": [
        { "feature": 5, "threshold": 0.8, "left": 1, "right": 2 },
        { "value": [70.0, 30.0] },
        { "value": [10.0, 90.0] }
    ] }
  ]
}"#;

pub fn write_artifacts(dir: &Path, scaler: &str, classifier: &str) {
    std::fs::write(dir.join("scaler.json"), scaler).unwrap();
    std::fs::write(dir.join("classifier.json"), classifier).unwrap();
}
