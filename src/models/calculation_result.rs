//! Calculation result models for the Grade Engine.
//!
//! This module contains the [`GradeOutcome`] type returned by a final-grade
//! calculation, its audit trace, and the confirmation records returned by
//! the registration operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use grade_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "weight_sum_check".to_string(),
///     rule_name: "Weight Sum Check".to_string(),
///     input: serde_json::json!({"weights": ["50", "50"]}),
///     output: serde_json::json!({"total_weight": "100"}),
///     reasoning: "Weights sum to 100%".to_string(),
/// };
/// assert_eq!(step.rule_id, "weight_sum_check");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent the calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the first step recorded for `rule_id`, if any.
    pub fn find_step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }

    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|warning| warning.code == code)
    }
}

/// The result of a final-grade calculation.
///
/// Snapshots of this record are appended to the calculator history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeOutcome {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The student the grade belongs to.
    pub student_id: String,
    /// The student name.
    pub student_name: String,
    /// Sum of weighted contributions, rounded to 2 decimals.
    pub base_grade: Decimal,
    /// Extra points the caller asked for.
    pub extra_points_requested: Decimal,
    /// Extra points that were actually applied.
    pub extra_points_applied: Decimal,
    /// Whether the request stayed within the recommended maximum.
    pub within_recommended_limit: bool,
    /// Final grade after extra points and the ceiling, rounded to 2 decimals.
    pub final_grade: Decimal,
    /// Whether the student met the minimum attendance requirement.
    pub has_minimum_attendance: bool,
    /// Whether the student passes the course.
    pub passes_course: bool,
    /// Whether the final grade was clamped to the ceiling.
    pub grade_capped: bool,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// Summary of a batch evaluation registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSummary {
    /// True if every evaluation in the batch was registered.
    pub success: bool,
    /// The student the evaluations were registered on.
    pub student_id: String,
    /// Number of evaluations added by this batch.
    pub evaluations_added: usize,
    /// Number of evaluations the student holds after the batch.
    pub total_evaluations: usize,
    /// One message per rejected item, in batch order.
    pub errors: Vec<String>,
}

/// Confirmation of an attendance registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceConfirmation {
    /// Always true; kept for callers that print confirmations uniformly.
    pub success: bool,
    /// The student whose attendance was recorded.
    pub student_id: String,
    /// The recorded attendance flag.
    pub has_minimum_attendance: bool,
    /// The attendance policy verdict message.
    pub message: String,
}

/// Confirmation of an extra-points policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfirmation {
    /// Always true; kept for callers that print confirmations uniformly.
    pub success: bool,
    /// Whether instructors agree on granting extra points.
    pub teachers_agree: bool,
    /// Number of instructors supplied with this configuration (0 if none).
    pub teachers_count: usize,
    /// Human-readable summary.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_step(rule_id: &str) -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: rule_id.to_string(),
            rule_name: "Sample".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: "sample".to_string(),
        }
    }

    fn create_sample_outcome() -> GradeOutcome {
        GradeOutcome {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            student_id: "S1".to_string(),
            student_name: "Ana".to_string(),
            base_grade: dec("16.30"),
            extra_points_requested: dec("0"),
            extra_points_applied: dec("0"),
            within_recommended_limit: true,
            final_grade: dec("16.30"),
            has_minimum_attendance: true,
            passes_course: true,
            grade_capped: false,
            audit_trace: AuditTrace {
                steps: vec![create_sample_step("base_grade")],
                warnings: vec![],
                duration_us: 42,
            },
        }
    }

    #[test]
    fn test_find_step_by_rule_id() {
        let trace = AuditTrace {
            steps: vec![create_sample_step("weight_sum_check"), create_sample_step("base_grade")],
            warnings: vec![],
            duration_us: 0,
        };
        assert_eq!(trace.find_step("base_grade").unwrap().rule_id, "base_grade");
        assert!(trace.find_step("missing").is_none());
    }

    #[test]
    fn test_has_warning() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning {
                code: "GRADE_CAPPED".to_string(),
                message: "capped".to_string(),
                severity: "low".to_string(),
            }],
            duration_us: 0,
        };
        assert!(trace.has_warning("GRADE_CAPPED"));
        assert!(!trace.has_warning("OTHER"));
    }

    #[test]
    fn test_outcome_serializes_decimals_as_strings() {
        let outcome = create_sample_outcome();
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["base_grade"].as_str().unwrap(), "16.30");
        assert_eq!(json["passes_course"].as_bool().unwrap(), true);
        assert_eq!(json["audit_trace"]["duration_us"].as_u64().unwrap(), 42);
    }

    #[test]
    fn test_outcome_round_trip() {
        let outcome = create_sample_outcome();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: GradeOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
