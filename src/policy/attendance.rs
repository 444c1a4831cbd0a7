//! Attendance policy.
//!
//! Classifies attendance compliance and holds the instructors' agreement on
//! granting extra points. Attendance is a binary gate: it never deducts
//! points, it blocks both course passage and bonus eligibility downstream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MINIMUM_ATTENDANCE_PERCENTAGE;
use crate::error::{EngineError, EngineResult};
use crate::models::MAX_WEIGHT;

/// Message for a student who met the attendance requirement.
pub const MEETS_ATTENDANCE_MESSAGE: &str = "Meets the minimum attendance requirement";

/// Message for a student who did not meet the attendance requirement.
pub const MISSES_ATTENDANCE_MESSAGE: &str =
    "Does NOT meet the minimum attendance requirement (required to pass the course)";

/// Result of classifying a student's attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceVerdict {
    /// Whether the requirement is met.
    pub meets_requirement: bool,
    /// Human-readable verdict.
    pub message: String,
}

/// Attendance policy state owned by a calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    teachers_agree: bool,
    minimum_percentage: Decimal,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_ATTENDANCE_PERCENTAGE)
    }
}

impl AttendancePolicy {
    /// Creates a policy with instructor agreement on and the given minimum
    /// attendance percentage.
    pub fn new(minimum_percentage: Decimal) -> Self {
        Self {
            teachers_agree: true,
            minimum_percentage,
        }
    }

    /// Classifies whether the student meets minimum attendance.
    ///
    /// # Example
    ///
    /// ```
    /// use grade_engine::policy::AttendancePolicy;
    ///
    /// let verdict = AttendancePolicy::check_minimum_attendance(false);
    /// assert!(!verdict.meets_requirement);
    /// assert!(verdict.message.contains("NOT"));
    /// ```
    pub fn check_minimum_attendance(has_minimum_attendance: bool) -> AttendanceVerdict {
        let message = if has_minimum_attendance {
            MEETS_ATTENDANCE_MESSAGE
        } else {
            MISSES_ATTENDANCE_MESSAGE
        };

        AttendanceVerdict {
            meets_requirement: has_minimum_attendance,
            message: message.to_string(),
        }
    }

    /// Returns true if `percentage` reaches the minimum attendance.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if `percentage` is outside `[0, 100]`.
    pub fn meets_minimum_percentage(&self, percentage: Decimal) -> EngineResult<bool> {
        if percentage < Decimal::ZERO || percentage > MAX_WEIGHT {
            return Err(EngineError::validation(
                "attendance_percentage",
                format!("must be between 0 and 100, got {}", percentage),
            ));
        }
        Ok(percentage >= self.minimum_percentage)
    }

    /// Returns whether instructors agree on granting extra points.
    pub fn teachers_agree(&self) -> bool {
        self.teachers_agree
    }

    /// Records whether instructors agree on granting extra points.
    pub fn set_teachers_agree(&mut self, agreement: bool) {
        self.teachers_agree = agreement;
    }

    /// Returns the minimum attendance percentage.
    pub fn minimum_percentage(&self) -> Decimal {
        self.minimum_percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_meets_requirement_verdict() {
        let verdict = AttendancePolicy::check_minimum_attendance(true);
        assert!(verdict.meets_requirement);
        assert_eq!(verdict.message, MEETS_ATTENDANCE_MESSAGE);
    }

    #[test]
    fn test_misses_requirement_verdict() {
        let verdict = AttendancePolicy::check_minimum_attendance(false);
        assert!(!verdict.meets_requirement);
        assert_eq!(verdict.message, MISSES_ATTENDANCE_MESSAGE);
    }

    #[test]
    fn test_agreement_defaults_to_true() {
        let policy = AttendancePolicy::default();
        assert!(policy.teachers_agree());
        assert_eq!(policy.minimum_percentage(), dec("70"));
    }

    #[test]
    fn test_set_agreement() {
        let mut policy = AttendancePolicy::default();
        policy.set_teachers_agree(false);
        assert!(!policy.teachers_agree());
    }

    #[test]
    fn test_percentage_threshold_is_inclusive() {
        let policy = AttendancePolicy::default();
        assert!(policy.meets_minimum_percentage(dec("70")).unwrap());
        assert!(policy.meets_minimum_percentage(dec("95.5")).unwrap());
        assert!(!policy.meets_minimum_percentage(dec("69.99")).unwrap());
    }

    #[test]
    fn test_percentage_out_of_range_is_rejected() {
        let policy = AttendancePolicy::default();
        assert!(policy.meets_minimum_percentage(dec("-1")).is_err());
        assert!(policy.meets_minimum_percentage(dec("100.01")).is_err());
    }
}
