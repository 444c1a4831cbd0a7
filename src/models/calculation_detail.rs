//! Detailed calculation breakdown models.
//!
//! A [`CalculationDetail`] explains a [`super::GradeOutcome`] item by item:
//! each evaluation's contribution, the attendance decision, the extra-points
//! decision and the calculator metadata.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the student the breakdown belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    /// Student identifier.
    pub id: String,
    /// Student name.
    pub name: String,
    /// Number of registered evaluations.
    pub evaluations_count: usize,
}

/// One numbered line of the per-evaluation breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationLine {
    /// 1-based position in registration order.
    pub number: usize,
    /// Evaluation name.
    pub name: String,
    /// Score on the 0-20 scale.
    pub score: Decimal,
    /// Weight in percent.
    pub weight: Decimal,
    /// Weighted contribution rounded to 2 decimals.
    pub weighted_score: Decimal,
    /// Readable contribution, e.g. "30% of 15 = 4.50 points".
    pub contribution: String,
}

/// How the base grade was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCalculation {
    /// Sum of all evaluation weights.
    pub total_weight: Decimal,
    /// Base grade rounded to 2 decimals.
    pub base_grade: Decimal,
    /// The formula used.
    pub formula: String,
}

/// Attendance decision and its effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDetail {
    /// Whether the requirement is met.
    pub meets_requirement: bool,
    /// Policy verdict message.
    pub message: String,
    /// What the requirement gates.
    pub impact: String,
}

/// Extra-points decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPointsDetail {
    /// Extra points the caller asked for.
    pub requested: Decimal,
    /// Extra points actually applied.
    pub applied: Decimal,
    /// Whether instructors agree on granting extra points.
    pub teachers_agree: bool,
    /// Whether the request is within the recommended maximum.
    pub within_recommended_limit: bool,
    /// Policy message.
    pub message: String,
}

/// Final decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    /// Final grade rounded to 2 decimals.
    pub final_grade: Decimal,
    /// Whether the student passes the course.
    pub passes_course: bool,
    /// Whether the grade was clamped to the ceiling.
    pub grade_capped: bool,
    /// Minimum final grade needed to pass.
    pub approval_threshold: Decimal,
}

/// Who computed the grade, when, and how long it took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationMetadata {
    /// Identifier of the underlying calculation.
    pub calculation_id: Uuid,
    /// Name of the teacher owning the calculator.
    pub calculated_by: String,
    /// Identifier of the teacher owning the calculator.
    pub teacher_id: String,
    /// Calculation duration in microseconds.
    pub duration_us: u64,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
}

/// Full breakdown of a final-grade calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationDetail {
    /// Student identity.
    pub student_info: StudentInfo,
    /// Per-evaluation breakdown in registration order.
    pub evaluations_detail: Vec<EvaluationLine>,
    /// Base grade derivation.
    pub base_calculation: BaseCalculation,
    /// Attendance decision.
    pub attendance: AttendanceDetail,
    /// Extra-points decision.
    pub extra_points: ExtraPointsDetail,
    /// Final decision.
    pub final_result: FinalResult,
    /// Calculator metadata.
    pub metadata: CalculationMetadata,
}
