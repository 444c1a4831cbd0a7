//! Extra-points application.
//!
//! Wraps [`ExtraPointsPolicy::calculate_extra_points`] with an audit step and
//! checks requests against the recommended maximum.

use rust_decimal::Decimal;

use crate::config::GradingRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning};
use crate::policy::{ExtraPointsOutcome, ExtraPointsPolicy};

/// The result of applying extra points.
#[derive(Debug, Clone)]
pub struct ExtraPointsResult {
    /// The policy outcome.
    pub outcome: ExtraPointsOutcome,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Raised when the grade was clamped to the ceiling.
    pub warning: Option<AuditWarning>,
}

/// Checks `requested` against `rules.max_extra_points`.
///
/// When `rules.enforce_extra_points_limit` is set an excessive request is an
/// error; otherwise it only produces an `EXTRA_POINTS_ABOVE_LIMIT` warning.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] if `requested` is negative, or if it
/// exceeds the limit while the limit is enforced.
pub fn check_extra_points_limit(
    requested: Decimal,
    rules: &GradingRules,
) -> EngineResult<Option<AuditWarning>> {
    if ExtraPointsPolicy::validate_extra_points(requested, rules.max_extra_points)? {
        return Ok(None);
    }

    if rules.enforce_extra_points_limit {
        return Err(EngineError::validation(
            "extra_points",
            format!(
                "{} exceeds the maximum of {} allowed",
                requested, rules.max_extra_points
            ),
        ));
    }

    Ok(Some(AuditWarning {
        code: "EXTRA_POINTS_ABOVE_LIMIT".to_string(),
        message: format!(
            "{} extra points exceed the recommended maximum of {}",
            requested, rules.max_extra_points
        ),
        severity: "medium".to_string(),
    }))
}

/// Applies `eligible_extra_points` to `base_grade` under instructor agreement.
///
/// # Errors
///
/// Propagates validation errors from the policy.
///
/// # Example
///
/// ```
/// use grade_engine::calculation::apply_extra_points;
/// use rust_decimal::Decimal;
///
/// let result = apply_extra_points(Decimal::new(15, 0), Decimal::new(2, 0), true, 4).unwrap();
/// assert_eq!(result.outcome.final_grade, Decimal::new(17, 0));
/// ```
pub fn apply_extra_points(
    base_grade: Decimal,
    eligible_extra_points: Decimal,
    teachers_agree: bool,
    step_number: u32,
) -> EngineResult<ExtraPointsResult> {
    let outcome =
        ExtraPointsPolicy::calculate_extra_points(base_grade, eligible_extra_points, teachers_agree)?;

    let warning = outcome.capped.then(|| AuditWarning {
        code: "GRADE_CAPPED".to_string(),
        message: format!(
            "{} + {} exceeds 20; final grade clamped",
            base_grade, eligible_extra_points
        ),
        severity: "low".to_string(),
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "extra_points".to_string(),
        rule_name: "Extra Points".to_string(),
        input: serde_json::json!({
            "base_grade": base_grade.to_string(),
            "eligible_extra_points": eligible_extra_points.to_string(),
            "teachers_agree": teachers_agree
        }),
        output: serde_json::json!({
            "extra_points_applied": outcome.extra_points_applied.to_string(),
            "final_grade": outcome.final_grade.to_string(),
            "capped": outcome.capped
        }),
        reasoning: outcome.message.clone(),
    };

    Ok(ExtraPointsResult {
        outcome,
        audit_step,
        warning,
    })
}
