//! Builds the itemised breakdown of a finished calculation.

use crate::calculation::round_display;
use crate::config::GradingRules;
use crate::models::{
    AttendanceDetail, BaseCalculation, CalculationDetail, CalculationMetadata, EvaluationLine,
    ExtraPointsDetail, FinalResult, GradeOutcome, Student, StudentInfo, Teacher,
};
use crate::policy::AttendancePolicy;

const BASE_FORMULA: &str = "Sum of (score x weight / 100) over every evaluation";

const ATTENDANCE_IMPACT: &str = "Mandatory requirement to pass the course";

pub(crate) fn build_detail(
    student: &Student,
    outcome: &GradeOutcome,
    teacher: &Teacher,
    rules: &GradingRules,
    teachers_agree: bool,
) -> CalculationDetail {
    let evaluations_detail = student
        .evaluations()
        .iter()
        .enumerate()
        .map(|(index, evaluation)| {
            let weighted_score = round_display(evaluation.weighted_contribution());
            EvaluationLine {
                number: index + 1,
                name: evaluation.name().to_string(),
                score: evaluation.score(),
                weight: evaluation.weight(),
                weighted_score,
                contribution: format!(
                    "{}% of {} = {:.2} points",
                    evaluation.weight(),
                    evaluation.score(),
                    weighted_score
                ),
            }
        })
        .collect();

    let verdict = AttendancePolicy::check_minimum_attendance(outcome.has_minimum_attendance);

    // Reuse the exact wording the extra-points step recorded
    let extra_points_message = outcome
        .audit_trace
        .find_step("extra_points")
        .map(|step| step.reasoning.clone())
        .unwrap_or_default();

    CalculationDetail {
        student_info: StudentInfo {
            id: student.student_id().to_string(),
            name: student.name().to_string(),
            evaluations_count: student.evaluation_count(),
        },
        evaluations_detail,
        base_calculation: BaseCalculation {
            total_weight: student.total_weight(),
            base_grade: outcome.base_grade,
            formula: BASE_FORMULA.to_string(),
        },
        attendance: AttendanceDetail {
            meets_requirement: verdict.meets_requirement,
            message: verdict.message,
            impact: ATTENDANCE_IMPACT.to_string(),
        },
        extra_points: ExtraPointsDetail {
            requested: outcome.extra_points_requested,
            applied: outcome.extra_points_applied,
            teachers_agree,
            within_recommended_limit: outcome.within_recommended_limit,
            message: extra_points_message,
        },
        final_result: FinalResult {
            final_grade: outcome.final_grade,
            passes_course: outcome.passes_course,
            grade_capped: outcome.grade_capped,
            approval_threshold: rules.pass_threshold,
        },
        metadata: CalculationMetadata {
            calculation_id: outcome.calculation_id,
            calculated_by: teacher.name().to_string(),
            teacher_id: teacher.teacher_id().to_string(),
            duration_us: outcome.audit_trace.duration_us,
            timestamp: outcome.timestamp,
        },
    }
}
