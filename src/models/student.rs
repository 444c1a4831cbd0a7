//! Student model.
//!
//! A [`Student`] holds an ordered list of evaluations (capped at
//! [`MAX_EVALUATIONS`]) and a minimum-attendance flag.

use rust_decimal::Decimal;
use serde::Serialize;

use super::Evaluation;
use crate::error::{EngineError, EngineResult};

/// Maximum number of evaluations a student can hold.
pub const MAX_EVALUATIONS: usize = 10;

/// Represents a student whose final grade is being computed.
///
/// # Example
///
/// ```
/// use grade_engine::models::{Evaluation, Student};
/// use rust_decimal::Decimal;
///
/// let mut student = Student::new("202110001", "Maria Gonzalez").unwrap();
/// student
///     .add_evaluation(Evaluation::new("Exam", Decimal::new(15, 0), Decimal::new(100, 0)).unwrap())
///     .unwrap();
/// assert_eq!(student.evaluation_count(), 1);
/// assert!(!student.has_minimum_attendance());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    student_id: String,
    name: String,
    evaluations: Vec<Evaluation>,
    has_minimum_attendance: bool,
}

impl Student {
    /// Creates a student with no evaluations and attendance not yet met.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if the id or name is blank.
    pub fn new(student_id: impl Into<String>, name: impl Into<String>) -> EngineResult<Self> {
        let student_id = non_blank(student_id.into(), "student.student_id")?;
        let name = non_blank(name.into(), "student.name")?;

        Ok(Self {
            student_id,
            name,
            evaluations: Vec::new(),
            has_minimum_attendance: false,
        })
    }

    /// Returns the student identifier.
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Returns the student name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the evaluations in insertion order.
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Returns the number of registered evaluations.
    pub fn evaluation_count(&self) -> usize {
        self.evaluations.len()
    }

    /// Returns the sum of all evaluation weights, in percent.
    pub fn total_weight(&self) -> Decimal {
        self.evaluations.iter().map(Evaluation::weight).sum()
    }

    /// Appends an evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CapacityExceeded`] when the student already
    /// holds [`MAX_EVALUATIONS`] evaluations. The list is left untouched.
    pub fn add_evaluation(&mut self, evaluation: Evaluation) -> EngineResult<()> {
        if self.evaluations.len() >= MAX_EVALUATIONS {
            return Err(EngineError::CapacityExceeded {
                student_id: self.student_id.clone(),
                max: MAX_EVALUATIONS,
            });
        }

        self.evaluations.push(evaluation);
        Ok(())
    }

    /// Returns true if the student met the minimum attendance requirement.
    pub fn has_minimum_attendance(&self) -> bool {
        self.has_minimum_attendance
    }

    /// Records whether the student met the minimum attendance requirement.
    pub fn set_minimum_attendance(&mut self, value: bool) {
        self.has_minimum_attendance = value;
    }
}

/// Trims `value` and rejects it if nothing is left.
pub(crate) fn non_blank(value: String, field: &str) -> EngineResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation(field, "must be a non-empty string"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(name: &str, weight: i64) -> Evaluation {
        Evaluation::new(name, Decimal::new(15, 0), Decimal::new(weight, 0)).unwrap()
    }

    #[test]
    fn test_new_student_trims_fields() {
        let student = Student::new(" 202110001 ", " Maria Gonzalez ").unwrap();
        assert_eq!(student.student_id(), "202110001");
        assert_eq!(student.name(), "Maria Gonzalez");
        assert_eq!(student.evaluation_count(), 0);
        assert!(!student.has_minimum_attendance());
    }

    #[test]
    fn test_blank_id_is_rejected() {
        match Student::new("", "Name") {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "student.student_id"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        match Student::new("S1", "  ") {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "student.name"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluations_keep_insertion_order() {
        let mut student = Student::new("S1", "Ana").unwrap();
        student.add_evaluation(evaluation("First", 50)).unwrap();
        student.add_evaluation(evaluation("Second", 50)).unwrap();

        let names: Vec<&str> = student.evaluations().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(student.total_weight(), Decimal::new(100, 0));
    }

    #[test]
    fn test_eleventh_evaluation_is_rejected() {
        let mut student = Student::new("S1", "Ana").unwrap();
        for i in 0..MAX_EVALUATIONS {
            student
                .add_evaluation(evaluation(&format!("Eval {}", i + 1), 10))
                .unwrap();
        }
        assert_eq!(student.evaluation_count(), 10);

        let result = student.add_evaluation(evaluation("Eval 11", 10));
        match result {
            Err(EngineError::CapacityExceeded { student_id, max }) => {
                assert_eq!(student_id, "S1");
                assert_eq!(max, 10);
            }
            other => panic!("Expected CapacityExceeded error, got {:?}", other),
        }
        assert_eq!(student.evaluation_count(), 10);
    }

    #[test]
    fn test_attendance_flag_round_trip() {
        let mut student = Student::new("S1", "Ana").unwrap();
        student.set_minimum_attendance(true);
        assert!(student.has_minimum_attendance());
        student.set_minimum_attendance(false);
        assert!(!student.has_minimum_attendance());
    }
}
