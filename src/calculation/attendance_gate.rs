//! Attendance gate.
//!
//! Minimum attendance is a prerequisite for any bonus: when it is not met the
//! requested extra points are withheld, independently of instructor agreement.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning};
use crate::policy::{AttendancePolicy, AttendanceVerdict};

/// The result of passing a request through the attendance gate.
#[derive(Debug, Clone)]
pub struct AttendanceGateResult {
    /// The attendance policy verdict.
    pub verdict: AttendanceVerdict,
    /// Extra points still eligible after the gate.
    pub eligible_extra_points: Decimal,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
    /// Raised when a positive request was withheld.
    pub warning: Option<AuditWarning>,
}

/// Applies the attendance gate to a request for `requested_extra_points`.
///
/// # Example
///
/// ```
/// use grade_engine::calculation::apply_attendance_gate;
/// use rust_decimal::Decimal;
///
/// let result = apply_attendance_gate(false, Decimal::new(2, 0), 3);
/// assert_eq!(result.eligible_extra_points, Decimal::ZERO);
/// assert!(!result.verdict.meets_requirement);
/// ```
pub fn apply_attendance_gate(
    has_minimum_attendance: bool,
    requested_extra_points: Decimal,
    step_number: u32,
) -> AttendanceGateResult {
    let verdict = AttendancePolicy::check_minimum_attendance(has_minimum_attendance);

    let eligible_extra_points = if has_minimum_attendance {
        requested_extra_points
    } else {
        Decimal::ZERO
    };

    let warning = if !has_minimum_attendance && requested_extra_points > Decimal::ZERO {
        Some(AuditWarning {
            code: "EXTRA_POINTS_WITHHELD".to_string(),
            message: format!(
                "{} extra points requested but withheld: minimum attendance not met",
                requested_extra_points
            ),
            severity: "medium".to_string(),
        })
    } else {
        None
    };

    let reasoning = if has_minimum_attendance {
        format!("{}; {} extra points remain eligible", verdict.message, eligible_extra_points)
    } else {
        format!("{}; extra points withheld", verdict.message)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_gate".to_string(),
        rule_name: "Attendance Gate".to_string(),
        input: serde_json::json!({
            "has_minimum_attendance": has_minimum_attendance,
            "requested_extra_points": requested_extra_points.to_string()
        }),
        output: serde_json::json!({
            "meets_requirement": verdict.meets_requirement,
            "eligible_extra_points": eligible_extra_points.to_string()
        }),
        reasoning,
    };

    AttendanceGateResult {
        verdict,
        eligible_extra_points,
        audit_step,
        warning,
    }
}
