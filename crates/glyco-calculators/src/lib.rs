//! glyco-calculators
//!
//! Helper calculators for values the screening form asks for but users often
//! don't know: BMI from weight and height, and a pedigree score estimated from
//! family history. Pure functions, no I/O.

pub mod bmi;
pub mod error;
pub mod pedigree;
