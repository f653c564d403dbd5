pub mod calculators;
pub mod fields;
pub mod health;
pub mod predict;
pub mod report;
