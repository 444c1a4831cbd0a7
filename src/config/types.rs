//! Configuration types for grade calculation.
//!
//! This module contains the strongly-typed [`GradingRules`] structure that
//! is deserialized from YAML configuration files.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{MAX_SCORE, MAX_WEIGHT};

/// Minimum final grade needed to pass the course.
pub const DEFAULT_PASS_THRESHOLD: Decimal = Decimal::from_parts(105, 0, 0, false, 1);

/// Allowed deviation of the weight sum from 100%.
pub const DEFAULT_WEIGHT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Upper bound on a single calculation's wall-clock time, in milliseconds.
pub const DEFAULT_TIME_BUDGET_MS: u64 = 300;

/// Recommended maximum of extra points per student.
pub const DEFAULT_MAX_EXTRA_POINTS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Minimum attendance percentage that satisfies the attendance requirement.
pub const DEFAULT_MINIMUM_ATTENDANCE_PERCENTAGE: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// The tunable constants of the grading rules.
///
/// Every field has a default, so a configuration file only needs to list
/// the values it overrides.
///
/// # Example
///
/// ```
/// use grade_engine::config::GradingRules;
/// use rust_decimal::Decimal;
///
/// let rules = GradingRules::default();
/// assert_eq!(rules.pass_threshold, Decimal::new(105, 1));
/// assert_eq!(rules.time_budget_ms, 300);
/// assert!(!rules.enforce_extra_points_limit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradingRules {
    /// Minimum final grade needed to pass (inclusive).
    pub pass_threshold: Decimal,
    /// Allowed deviation of the weight sum from 100%.
    pub weight_tolerance: Decimal,
    /// Wall-clock budget for one calculation, in milliseconds.
    pub time_budget_ms: u64,
    /// Recommended maximum of extra points.
    pub max_extra_points: Decimal,
    /// Reject calculations asking for more than `max_extra_points`.
    pub enforce_extra_points_limit: bool,
    /// Attendance percentage at or above which the requirement is met.
    pub minimum_attendance_percentage: Decimal,
}

impl Default for GradingRules {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            max_extra_points: DEFAULT_MAX_EXTRA_POINTS,
            enforce_extra_points_limit: false,
            minimum_attendance_percentage: DEFAULT_MINIMUM_ATTENDANCE_PERCENTAGE,
        }
    }
}

impl GradingRules {
    /// Returns the time budget as a [`Duration`].
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    /// Checks that every rule lies within the grade and weight scales.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRules`] naming the first offending rule.
    pub fn validate(&self) -> EngineResult<()> {
        if self.pass_threshold < Decimal::ZERO || self.pass_threshold > MAX_SCORE {
            return Err(invalid(format!(
                "pass_threshold must be between 0 and {}, got {}",
                MAX_SCORE, self.pass_threshold
            )));
        }

        if self.weight_tolerance < Decimal::ZERO || self.weight_tolerance >= MAX_WEIGHT {
            return Err(invalid(format!(
                "weight_tolerance must be at least 0 and below {}, got {}",
                MAX_WEIGHT, self.weight_tolerance
            )));
        }

        if self.max_extra_points < Decimal::ZERO {
            return Err(invalid(format!(
                "max_extra_points cannot be negative, got {}",
                self.max_extra_points
            )));
        }

        if self.minimum_attendance_percentage < Decimal::ZERO
            || self.minimum_attendance_percentage > MAX_WEIGHT
        {
            return Err(invalid(format!(
                "minimum_attendance_percentage must be between 0 and 100, got {}",
                self.minimum_attendance_percentage
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidRules { message }
}
