//! The grade calculator orchestrator.
//!
//! [`GradeCalculator`] registers evaluations and attendance on students,
//! holds the extra-points policy configuration, computes final grades and
//! keeps a history of past results.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    apply_attendance_gate, apply_extra_points, calculate_base_grade, check_extra_points_limit,
    check_weight_sum, decide_pass, enforce_time_budget, round_display,
};
use crate::config::GradingRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceConfirmation, AuditTrace, CalculationDetail, Evaluation, EvaluationDraft,
    GradeOutcome, PolicyConfirmation, RegistrationSummary, Student, Teacher,
};
use crate::policy::{AttendancePolicy, ExtraPointsPolicy};

use super::detail::build_detail;

/// Computes final grades for the students of one teacher.
///
/// Policy state (instructor agreement and participating instructors) lives
/// in the calculator, so two calculators never observe each other's
/// configuration.
///
/// # Example
///
/// ```
/// use grade_engine::calculator::GradeCalculator;
/// use grade_engine::models::{Evaluation, Student, Teacher};
/// use rust_decimal::Decimal;
///
/// let teacher = Teacher::new("T001", "Dr. Perez").unwrap();
/// let mut calculator = GradeCalculator::new(teacher);
/// let mut student = Student::new("202110001", "Maria Gonzalez").unwrap();
///
/// calculator.register_evaluations(
///     &mut student,
///     vec![Evaluation::new("Exam", Decimal::new(15, 0), Decimal::new(100, 0)).unwrap()],
/// );
/// calculator.register_attendance(&mut student, true);
///
/// let outcome = calculator.calculate_final_grade(&student, Decimal::new(2, 0)).unwrap();
/// assert_eq!(outcome.final_grade, Decimal::new(17, 0));
/// assert!(outcome.passes_course);
/// ```
#[derive(Debug, Clone)]
pub struct GradeCalculator {
    teacher: Teacher,
    rules: GradingRules,
    attendance_policy: AttendancePolicy,
    extra_points_policy: ExtraPointsPolicy,
    history: Vec<GradeOutcome>,
}

impl GradeCalculator {
    /// Creates a calculator with the default grading rules.
    pub fn new(teacher: Teacher) -> Self {
        Self {
            teacher,
            rules: GradingRules::default(),
            attendance_policy: AttendancePolicy::default(),
            extra_points_policy: ExtraPointsPolicy::default(),
            history: Vec::new(),
        }
    }

    /// Creates a calculator with custom grading rules.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRules`] if the rules fail validation.
    pub fn with_rules(teacher: Teacher, rules: GradingRules) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self {
            attendance_policy: AttendancePolicy::new(rules.minimum_attendance_percentage),
            rules,
            ..Self::new(teacher)
        })
    }

    /// Returns the teacher owning this calculator.
    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// Returns the grading rules.
    pub fn rules(&self) -> &GradingRules {
        &self.rules
    }

    /// Returns the attendance policy state.
    pub fn attendance_policy(&self) -> &AttendancePolicy {
        &self.attendance_policy
    }

    /// Returns the extra-points policy state.
    pub fn extra_points_policy(&self) -> &ExtraPointsPolicy {
        &self.extra_points_policy
    }

    /// Registers a batch of evaluations on `student`.
    ///
    /// Each item is attempted independently; rejected items are reported in
    /// `errors` and do not block the others.
    pub fn register_evaluations(
        &self,
        student: &mut Student,
        evaluations: Vec<Evaluation>,
    ) -> RegistrationSummary {
        self.register_all(student, evaluations.into_iter().map(Ok))
    }

    /// Registers a batch of unvalidated evaluations on `student`.
    ///
    /// Invalid drafts are reported per item, the same way as capacity
    /// failures.
    pub fn register_evaluation_drafts(
        &self,
        student: &mut Student,
        drafts: Vec<EvaluationDraft>,
    ) -> RegistrationSummary {
        self.register_all(student, drafts.into_iter().map(Evaluation::try_from))
    }

    fn register_all(
        &self,
        student: &mut Student,
        items: impl Iterator<Item = EngineResult<Evaluation>>,
    ) -> RegistrationSummary {
        let mut evaluations_added = 0;
        let mut errors = Vec::new();

        for item in items {
            match item.and_then(|evaluation| student.add_evaluation(evaluation)) {
                Ok(()) => evaluations_added += 1,
                Err(err) => errors.push(err.to_string()),
            }
        }

        if !errors.is_empty() {
            warn!(
                student_id = %student.student_id(),
                rejected = errors.len(),
                "Some evaluations were rejected"
            );
        }
        debug!(
            student_id = %student.student_id(),
            evaluations_added,
            total = student.evaluation_count(),
            "Registered evaluations"
        );

        RegistrationSummary {
            success: errors.is_empty(),
            student_id: student.student_id().to_string(),
            evaluations_added,
            total_evaluations: student.evaluation_count(),
            errors,
        }
    }

    /// Records whether `student` met the minimum attendance requirement.
    pub fn register_attendance(
        &self,
        student: &mut Student,
        has_minimum_attendance: bool,
    ) -> AttendanceConfirmation {
        student.set_minimum_attendance(has_minimum_attendance);
        let verdict = AttendancePolicy::check_minimum_attendance(has_minimum_attendance);

        debug!(
            student_id = %student.student_id(),
            has_minimum_attendance,
            "Registered attendance"
        );

        AttendanceConfirmation {
            success: true,
            student_id: student.student_id().to_string(),
            has_minimum_attendance,
            message: verdict.message,
        }
    }

    /// Records attendance from a raw attendance percentage.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if `percentage` is outside
    /// `[0, 100]`; the student is left untouched.
    pub fn register_attendance_percentage(
        &self,
        student: &mut Student,
        percentage: Decimal,
    ) -> EngineResult<AttendanceConfirmation> {
        let meets = self.attendance_policy.meets_minimum_percentage(percentage)?;
        Ok(self.register_attendance(student, meets))
    }

    /// Configures whether instructors agree on extra points and, when a
    /// non-empty list is given, who the participating instructors are.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if the list holds a blank entry.
    /// Nothing is changed on error.
    pub fn register_extra_points_policy(
        &mut self,
        teachers_agree: bool,
        teachers: Option<Vec<String>>,
    ) -> EngineResult<PolicyConfirmation> {
        let teachers = teachers.filter(|list| !list.is_empty());
        let teachers_count = teachers.as_ref().map_or(0, Vec::len);

        if let Some(list) = teachers {
            self.extra_points_policy.set_participating_teachers(list)?;
        }
        self.attendance_policy.set_teachers_agree(teachers_agree);

        info!(
            teacher_id = %self.teacher.teacher_id(),
            teachers_agree,
            teachers_count,
            "Configured extra points policy"
        );

        let status = if teachers_agree { "APPROVED" } else { "REJECTED" };
        Ok(PolicyConfirmation {
            success: true,
            teachers_agree,
            teachers_count,
            message: format!("Extra points policy configured: {}", status),
        })
    }

    /// Computes the final grade of `student`.
    ///
    /// `extra_points` are only considered when the student met minimum
    /// attendance and instructors agree. The result is appended to the
    /// history.
    ///
    /// # Errors
    ///
    /// Every failure is returned as [`EngineError::Calculation`], whose
    /// `kind` tells validation, capacity, weight-sum and timeout failures
    /// apart and whose source is the original error.
    pub fn calculate_final_grade(
        &mut self,
        student: &Student,
        extra_points: Decimal,
    ) -> EngineResult<GradeOutcome> {
        let start_time = Instant::now();

        match self.compute(student, extra_points, start_time) {
            Ok(outcome) => {
                info!(
                    calculation_id = %outcome.calculation_id,
                    student_id = %outcome.student_id,
                    final_grade = %outcome.final_grade,
                    passes_course = outcome.passes_course,
                    duration_us = outcome.audit_trace.duration_us,
                    "Grade calculation completed"
                );
                self.history.push(outcome.clone());
                Ok(outcome)
            }
            Err(err) => {
                let elapsed_us = start_time.elapsed().as_micros() as u64;
                warn!(
                    student_id = %student.student_id(),
                    error = %err,
                    elapsed_us,
                    "Grade calculation failed"
                );
                Err(EngineError::Calculation {
                    kind: err.kind(),
                    elapsed_us,
                    source: Box::new(err),
                })
            }
        }
    }

    fn compute(
        &self,
        student: &Student,
        extra_points: Decimal,
        start_time: Instant,
    ) -> EngineResult<GradeOutcome> {
        let mut steps = Vec::new();
        let mut warnings = Vec::new();
        let mut step_number: u32 = 1;

        let limit_warning = check_extra_points_limit(extra_points, &self.rules)?;
        let within_recommended_limit = limit_warning.is_none();
        warnings.extend(limit_warning);

        let evaluations = student.evaluations();
        if evaluations.is_empty() {
            return Err(EngineError::validation(
                "student.evaluations",
                format!(
                    "student '{}' has no registered evaluations",
                    student.student_id()
                ),
            ));
        }

        let weight_check = check_weight_sum(evaluations, self.rules.weight_tolerance, step_number)?;
        steps.push(weight_check.audit_step);
        step_number += 1;

        let base = calculate_base_grade(evaluations, step_number);
        steps.push(base.audit_step);
        step_number += 1;

        let teachers_agree = self.attendance_policy.teachers_agree();
        let has_minimum_attendance = student.has_minimum_attendance();

        let gate = apply_attendance_gate(has_minimum_attendance, extra_points, step_number);
        steps.push(gate.audit_step);
        warnings.extend(gate.warning);
        step_number += 1;

        let extra = apply_extra_points(
            base.base_grade,
            gate.eligible_extra_points,
            teachers_agree,
            step_number,
        )?;
        steps.push(extra.audit_step);
        warnings.extend(extra.warning);
        step_number += 1;

        let pass = decide_pass(
            extra.outcome.exact_final_grade,
            has_minimum_attendance,
            self.rules.pass_threshold,
            step_number,
        );
        steps.push(pass.audit_step);

        let elapsed = start_time.elapsed();
        enforce_time_budget(elapsed, self.rules.time_budget())?;

        Ok(GradeOutcome {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            student_id: student.student_id().to_string(),
            student_name: student.name().to_string(),
            base_grade: round_display(base.base_grade),
            extra_points_requested: extra_points,
            extra_points_applied: extra.outcome.extra_points_applied,
            within_recommended_limit,
            final_grade: extra.outcome.final_grade,
            has_minimum_attendance,
            passes_course: pass.passes_course,
            grade_capped: extra.outcome.capped,
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us: elapsed.as_micros() as u64,
            },
        })
    }

    /// Computes the final grade of `student` and explains it item by item.
    ///
    /// The calculation is run in full every time (and recorded in the
    /// history), so this is exactly as strict as
    /// [`GradeCalculator::calculate_final_grade`].
    ///
    /// # Errors
    ///
    /// Same as [`GradeCalculator::calculate_final_grade`].
    pub fn get_calculation_detail(
        &mut self,
        student: &Student,
        extra_points: Decimal,
    ) -> EngineResult<CalculationDetail> {
        let outcome = self.calculate_final_grade(student, extra_points)?;
        Ok(build_detail(
            student,
            &outcome,
            &self.teacher,
            &self.rules,
            self.attendance_policy.teachers_agree(),
        ))
    }

    /// Returns past results in calculation order.
    pub fn get_calculation_history(&self) -> &[GradeOutcome] {
        &self.history
    }

    /// Removes all past results.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
