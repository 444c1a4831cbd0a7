//! Calculation logic for the Grade Engine.
//!
//! This module contains the individual rule steps of a final-grade
//! calculation: weight sum check, weighted base grade, attendance gate,
//! extra points with the grade ceiling, pass decision, and the post-hoc
//! time budget. Each step returns its value together with an audit step.

mod attendance_gate;
mod base_grade;
mod extra_points;
mod pass_decision;
mod rounding;
mod time_budget;
mod weight_sum;

pub use attendance_gate::{AttendanceGateResult, apply_attendance_gate};
pub use base_grade::{BaseGradeResult, calculate_base_grade};
pub use extra_points::{ExtraPointsResult, apply_extra_points, check_extra_points_limit};
pub use pass_decision::{PassDecision, decide_pass};
pub use rounding::{DISPLAY_DECIMALS, round_display};
pub use time_budget::enforce_time_budget;
pub use weight_sum::{WeightSumCheck, check_weight_sum};
