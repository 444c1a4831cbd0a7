//! Pass/fail decision.
//!
//! A student passes only when both conditions hold: minimum attendance is
//! met and the exact final grade reaches the pass threshold.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the pass decision.
#[derive(Debug, Clone)]
pub struct PassDecision {
    /// Whether the student passes the course.
    pub passes_course: bool,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Decides whether the student passes.
///
/// # Example
///
/// ```
/// use grade_engine::calculation::decide_pass;
/// use rust_decimal::Decimal;
///
/// let threshold = Decimal::new(105, 1);
/// assert!(decide_pass(Decimal::new(105, 1), true, threshold, 5).passes_course);
/// assert!(!decide_pass(Decimal::new(20, 0), false, threshold, 5).passes_course);
/// ```
pub fn decide_pass(
    final_grade: Decimal,
    has_minimum_attendance: bool,
    pass_threshold: Decimal,
    step_number: u32,
) -> PassDecision {
    let reaches_threshold = final_grade >= pass_threshold;
    let passes_course = has_minimum_attendance && reaches_threshold;

    let reasoning = match (has_minimum_attendance, reaches_threshold) {
        (true, true) => format!("{} >= {} with attendance met: passes", final_grade, pass_threshold),
        (true, false) => format!("{} < {}: fails", final_grade, pass_threshold),
        (false, _) => "Minimum attendance not met: fails regardless of grade".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pass_decision".to_string(),
        rule_name: "Pass Decision".to_string(),
        input: serde_json::json!({
            "final_grade": final_grade.to_string(),
            "has_minimum_attendance": has_minimum_attendance,
            "pass_threshold": pass_threshold.to_string()
        }),
        output: serde_json::json!({
            "passes_course": passes_course
        }),
        reasoning,
    };

    PassDecision {
        passes_course,
        audit_step,
    }
}
