//! Base grade calculation.
//!
//! The base grade is the sum of every evaluation's weighted contribution.
//! Weights are percentages summing to 100, so the sum is already on the
//! 0-20 scale and is not divided again.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Evaluation};

/// The result of computing the base grade.
#[derive(Debug, Clone)]
pub struct BaseGradeResult {
    /// The exact (unrounded) base grade.
    pub base_grade: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the weighted contributions of `evaluations`.
///
/// The sum is not clamped. A weight sum slightly above 100% (still within
/// tolerance) can push it past 20, which the extra-points step rejects.
///
/// # Example
///
/// ```
/// use grade_engine::calculation::calculate_base_grade;
/// use grade_engine::models::Evaluation;
/// use rust_decimal::Decimal;
///
/// let evaluations = vec![
///     Evaluation::new("Midterm", Decimal::new(15, 0), Decimal::new(50, 0)).unwrap(),
///     Evaluation::new("Final", Decimal::new(16, 0), Decimal::new(50, 0)).unwrap(),
/// ];
/// let result = calculate_base_grade(&evaluations, 2);
/// assert_eq!(result.base_grade, Decimal::new(155, 1));
/// ```
pub fn calculate_base_grade(evaluations: &[Evaluation], step_number: u32) -> BaseGradeResult {
    let contributions: Vec<Decimal> = evaluations
        .iter()
        .map(Evaluation::weighted_contribution)
        .collect();
    let base_grade: Decimal = contributions.iter().copied().sum();

    let terms: Vec<String> = evaluations
        .iter()
        .map(|e| format!("{} x {}%", e.score(), e.weight()))
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_grade".to_string(),
        rule_name: "Weighted Base Grade".to_string(),
        input: serde_json::json!({
            "evaluations": evaluations
                .iter()
                .map(|e| serde_json::json!({
                    "name": e.name(),
                    "score": e.score().to_string(),
                    "weight": e.weight().to_string()
                }))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "contributions": contributions.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "base_grade": base_grade.to_string()
        }),
        reasoning: format!("Sum of ({}) / 100 = {}", terms.join(" + "), base_grade),
    };

    BaseGradeResult {
        base_grade,
        audit_step,
    }
}
