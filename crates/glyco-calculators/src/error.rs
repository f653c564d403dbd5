use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
