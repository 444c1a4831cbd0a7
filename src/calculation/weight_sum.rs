//! Weight sum check.
//!
//! Evaluation weights are percentages of the final grade, so they must form
//! a complete partition: their sum has to be 100% within a small tolerance.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Evaluation, MAX_WEIGHT};

/// The result of a successful weight sum check.
#[derive(Debug, Clone)]
pub struct WeightSumCheck {
    /// The sum of all evaluation weights.
    pub total_weight: Decimal,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Checks that the evaluation weights sum to 100% within `tolerance`.
///
/// The comparison uses the exact sum: `|sum - 100| <= tolerance` passes.
///
/// # Errors
///
/// Returns [`EngineError::WeightSum`] carrying the actual sum otherwise.
///
/// # Example
///
/// ```
/// use grade_engine::calculation::check_weight_sum;
/// use grade_engine::models::Evaluation;
/// use rust_decimal::Decimal;
///
/// let evaluations = vec![
///     Evaluation::new("Midterm", Decimal::new(15, 0), Decimal::new(40, 0)).unwrap(),
///     Evaluation::new("Final", Decimal::new(16, 0), Decimal::new(40, 0)).unwrap(),
/// ];
/// let result = check_weight_sum(&evaluations, Decimal::new(1, 2), 1);
/// assert!(result.unwrap_err().to_string().contains("100"));
/// ```
pub fn check_weight_sum(
    evaluations: &[Evaluation],
    tolerance: Decimal,
    step_number: u32,
) -> EngineResult<WeightSumCheck> {
    let total_weight: Decimal = evaluations.iter().map(Evaluation::weight).sum();
    let deviation = (total_weight - MAX_WEIGHT).abs();

    if deviation > tolerance {
        return Err(EngineError::WeightSum {
            total: total_weight,
        });
    }

    let weights: Vec<String> = evaluations.iter().map(|e| e.weight().to_string()).collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "weight_sum_check".to_string(),
        rule_name: "Weight Sum Check".to_string(),
        input: serde_json::json!({
            "weights": weights,
            "tolerance": tolerance.to_string()
        }),
        output: serde_json::json!({
            "total_weight": total_weight.to_string(),
            "deviation": deviation.to_string()
        }),
        reasoning: format!(
            "Weights sum to {}%, within {} of 100%",
            total_weight, tolerance
        ),
    };

    Ok(WeightSumCheck {
        total_weight,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn evaluations(weights: &[&str]) -> Vec<Evaluation> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Evaluation::new(format!("Eval {}", i + 1), dec("15"), dec(w)).unwrap())
            .collect()
    }

    #[test]
    fn test_exact_100_passes() {
        let result = check_weight_sum(&evaluations(&["30", "30", "20", "20"]), dec("0.01"), 1)
            .unwrap();

        assert_eq!(result.total_weight, dec("100"));
        assert_eq!(result.audit_step.rule_id, "weight_sum_check");
        assert_eq!(result.audit_step.step_number, 1);
        assert_eq!(
            result.audit_step.output["total_weight"].as_str().unwrap(),
            "100"
        );
    }

    #[test]
    fn test_within_tolerance_passes() {
        assert!(check_weight_sum(&evaluations(&["50", "50.01"]), dec("0.01"), 1).is_ok());
        assert!(check_weight_sum(&evaluations(&["50", "49.99"]), dec("0.01"), 1).is_ok());
    }

    #[test]
    fn test_outside_tolerance_fails() {
        let result = check_weight_sum(&evaluations(&["50", "50.02"]), dec("0.01"), 1);
        match result {
            Err(EngineError::WeightSum { total }) => assert_eq!(total, dec("100.02")),
            other => panic!("Expected WeightSum error, got {:?}", other),
        }
    }

    #[test]
    fn test_80_percent_fails_mentioning_100() {
        let err = check_weight_sum(&evaluations(&["40", "40"]), dec("0.01"), 1).unwrap_err();
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("80"));
    }

    #[test]
    fn test_empty_list_fails() {
        assert!(matches!(
            check_weight_sum(&[], dec("0.01"), 1),
            Err(EngineError::WeightSum { .. })
        ));
    }
}
