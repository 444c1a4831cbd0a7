//! Grading policies.
//!
//! The attendance policy classifies attendance compliance and holds the
//! instructors' agreement flag; the extra-points policy applies bonuses
//! under the grade ceiling. Both are plain values owned by a
//! [`crate::calculator::GradeCalculator`], so configuration never leaks
//! between calculators.

mod attendance;
mod extra_points;

pub use attendance::{
    AttendancePolicy, AttendanceVerdict, MEETS_ATTENDANCE_MESSAGE, MISSES_ATTENDANCE_MESSAGE,
};
pub use extra_points::{ExtraPointsOutcome, ExtraPointsPolicy};
