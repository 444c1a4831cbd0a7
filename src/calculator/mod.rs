//! The grade calculator and its detailed breakdown.

mod detail;
mod grade_calculator;

pub use grade_calculator::GradeCalculator;
