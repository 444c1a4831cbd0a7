//! Extra-points policy.
//!
//! Applies instructor-approved bonus points to a base grade, clamped to the
//! grade ceiling, and keeps the registry of instructors taking part in the
//! decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_display;
use crate::error::{EngineError, EngineResult};
use crate::models::MAX_SCORE;

/// Outcome of applying extra points to a base grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPointsOutcome {
    /// Extra points applied. When instructors agree this is the full
    /// requested amount, even if the final grade was clamped.
    pub extra_points_applied: Decimal,
    /// Final grade rounded to 2 decimals.
    pub final_grade: Decimal,
    /// Final grade before display rounding, used for threshold comparisons.
    pub exact_final_grade: Decimal,
    /// Whether `base_grade + extra_points` exceeded the ceiling.
    pub capped: bool,
    /// Human-readable summary.
    pub message: String,
}

/// Registry of instructors participating in extra-points decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPointsPolicy {
    participating_teachers: Vec<String>,
}

impl ExtraPointsPolicy {
    /// Replaces the list of participating instructors.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if the list is empty or holds a
    /// blank entry. The registry is left untouched on error.
    pub fn set_participating_teachers(&mut self, teachers: Vec<String>) -> EngineResult<()> {
        if teachers.is_empty() {
            return Err(EngineError::validation(
                "teachers",
                "the instructor list cannot be empty",
            ));
        }

        let mut cleaned = Vec::with_capacity(teachers.len());
        for (index, teacher) in teachers.iter().enumerate() {
            let trimmed = teacher.trim();
            if trimmed.is_empty() {
                return Err(EngineError::validation(
                    format!("teachers[{}]", index),
                    "must be a non-empty string",
                ));
            }
            cleaned.push(trimmed.to_string());
        }

        self.participating_teachers = cleaned;
        Ok(())
    }

    /// Returns the participating instructors.
    pub fn participating_teachers(&self) -> &[String] {
        &self.participating_teachers
    }

    /// Applies `extra_points` to `base_grade`.
    ///
    /// Without instructor agreement nothing is applied. Otherwise the full
    /// amount is applied and the result is clamped to 20.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if `base_grade` is outside
    /// `[0, 20]` or `extra_points` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use grade_engine::policy::ExtraPointsPolicy;
    /// use rust_decimal::Decimal;
    ///
    /// let outcome =
    ///     ExtraPointsPolicy::calculate_extra_points(Decimal::new(19, 0), Decimal::new(5, 0), true)
    ///         .unwrap();
    /// assert_eq!(outcome.final_grade, Decimal::new(20, 0));
    /// assert_eq!(outcome.extra_points_applied, Decimal::new(5, 0));
    /// assert!(outcome.capped);
    /// ```
    pub fn calculate_extra_points(
        base_grade: Decimal,
        extra_points: Decimal,
        teachers_agree: bool,
    ) -> EngineResult<ExtraPointsOutcome> {
        if base_grade < Decimal::ZERO || base_grade > MAX_SCORE {
            return Err(EngineError::validation(
                "base_grade",
                format!("must be between 0 and {}, got {}", MAX_SCORE, base_grade),
            ));
        }

        if extra_points < Decimal::ZERO {
            return Err(EngineError::validation(
                "extra_points",
                format!("cannot be negative, got {}", extra_points),
            ));
        }

        if !teachers_agree {
            return Ok(ExtraPointsOutcome {
                extra_points_applied: Decimal::ZERO,
                final_grade: round_display(base_grade),
                exact_final_grade: base_grade,
                capped: false,
                message: "Extra points NOT applied: instructors do not agree".to_string(),
            });
        }

        // An overflowing sum is far above the ceiling
        let (exact_final_grade, capped) = match base_grade.checked_add(extra_points) {
            Some(sum) if sum <= MAX_SCORE => (sum, false),
            _ => (MAX_SCORE, true),
        };

        let mut message = format!("Extra points applied: +{:.2}", extra_points);
        if capped {
            message.push_str(" (grade capped at 20)");
        }

        Ok(ExtraPointsOutcome {
            extra_points_applied: extra_points,
            final_grade: round_display(exact_final_grade),
            exact_final_grade,
            capped,
            message,
        })
    }

    /// Returns true if `extra_points` does not exceed `max_allowed`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if either value is negative.
    pub fn validate_extra_points(extra_points: Decimal, max_allowed: Decimal) -> EngineResult<bool> {
        if extra_points < Decimal::ZERO {
            return Err(EngineError::validation(
                "extra_points",
                format!("cannot be negative, got {}", extra_points),
            ));
        }

        if max_allowed < Decimal::ZERO {
            return Err(EngineError::validation(
                "max_allowed",
                format!("cannot be negative, got {}", max_allowed),
            ));
        }

        Ok(extra_points <= max_allowed)
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
    fn test_extra_points_added_below_ceiling() {
        let outcome =
            ExtraPointsPolicy::calculate_extra_points(dec("15"), dec("2"), true).unwrap();

        assert_eq!(outcome.extra_points_applied, dec("2"));
        assert_eq!(outcome.final_grade, dec("17"));
        assert!(!outcome.capped);
        assert_eq!(outcome.message, "Extra points applied: +2.00");
    }

    #[test]
    fn test_extra_points_clamped_at_ceiling() {
        let outcome =
            ExtraPointsPolicy::calculate_extra_points(dec("19"), dec("5"), true).unwrap();

        assert_eq!(outcome.final_grade, dec("20"));
        assert_eq!(outcome.extra_points_applied, dec("5"));
        assert!(outcome.capped);
        assert!(outcome.message.contains("capped at 20"));
    }

    #[test]
    fn test_exactly_reaching_ceiling_is_not_capped() {
        let outcome =
            ExtraPointsPolicy::calculate_extra_points(dec("18"), dec("2"), true).unwrap();

        assert_eq!(outcome.final_grade, dec("20"));
        assert!(!outcome.capped);
    }

    #[test]
    fn test_huge_extra_points_are_capped_without_overflow() {
        let outcome =
            ExtraPointsPolicy::calculate_extra_points(dec("15"), Decimal::MAX, true).unwrap();

        assert_eq!(outcome.final_grade, dec("20"));
        assert_eq!(outcome.exact_final_grade, dec("20"));
        assert_eq!(outcome.extra_points_applied, Decimal::MAX);
        assert!(outcome.capped);
    }

    #[test]
    fn test_base_grade_above_ceiling_is_rejected() {
        let result = ExtraPointsPolicy::calculate_extra_points(dec("20.002"), dec("0"), true);
        match result {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "base_grade"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_agreement_applies_nothing() {
        let outcome =
            ExtraPointsPolicy::calculate_extra_points(dec("15"), dec("2"), false).unwrap();

        assert_eq!(outcome.extra_points_applied, Decimal::ZERO);
        assert_eq!(outcome.final_grade, dec("15"));
        assert!(!outcome.capped);
        assert!(outcome.message.contains("NOT applied"));
    }

    #[test]
    fn test_final_grade_is_rounded_but_exact_value_kept() {
        let outcome =
            ExtraPointsPolicy::calculate_extra_points(dec("10.4949"), dec("0"), true).unwrap();

        assert_eq!(outcome.final_grade, dec("10.49"));
        assert_eq!(outcome.exact_final_grade, dec("10.4949"));
    }

    #[test]
    fn test_invalid_base_grade_is_rejected() {
        assert!(ExtraPointsPolicy::calculate_extra_points(dec("20.5"), dec("0"), true).is_err());
        assert!(ExtraPointsPolicy::calculate_extra_points(dec("-1"), dec("0"), true).is_err());
    }

    #[test]
    fn test_negative_extra_points_are_rejected() {
        let result = ExtraPointsPolicy::calculate_extra_points(dec("10"), dec("-1"), true);
        match result {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "extra_points"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_extra_points_boundary() {
        assert!(ExtraPointsPolicy::validate_extra_points(dec("2.0"), dec("2.0")).unwrap());
        assert!(!ExtraPointsPolicy::validate_extra_points(dec("2.01"), dec("2.0")).unwrap());
        assert!(ExtraPointsPolicy::validate_extra_points(dec("-0.1"), dec("2.0")).is_err());
        assert!(ExtraPointsPolicy::validate_extra_points(dec("1"), dec("-2")).is_err());
    }

    #[test]
    fn test_set_participating_teachers() {
        let mut policy = ExtraPointsPolicy::default();
        policy
            .set_participating_teachers(vec!["T001".to_string(), " T002 ".to_string()])
            .unwrap();

        assert_eq!(policy.participating_teachers(), &["T001", "T002"]);
    }

    #[test]
    fn test_empty_teacher_list_is_rejected() {
        let mut policy = ExtraPointsPolicy::default();
        policy
            .set_participating_teachers(vec!["T001".to_string()])
            .unwrap();

        assert!(policy.set_participating_teachers(vec![]).is_err());
        assert!(policy
            .set_participating_teachers(vec!["T003".to_string(), "  ".to_string()])
            .is_err());
        assert_eq!(policy.participating_teachers(), &["T001"]);
    }
}
