//! Grade Engine for final course grades
//!
//! This crate computes a student's final grade on the 0-20 scale from weighted
//! evaluations, gates extra points on minimum attendance and instructor
//! agreement, and decides whether the student passes the course.
//!
//! ```
//! use grade_engine::calculator::GradeCalculator;
//! use grade_engine::models::{Evaluation, Student, Teacher};
//! use rust_decimal::Decimal;
//!
//! let mut calculator = GradeCalculator::new(Teacher::new("T001", "Dr. Perez").unwrap());
//! let mut student = Student::new("202110001", "Maria Gonzalez").unwrap();
//!
//! calculator.register_evaluations(
//!     &mut student,
//!     vec![
//!         Evaluation::new("Midterm", Decimal::new(15, 0), Decimal::new(40, 0)).unwrap(),
//!         Evaluation::new("Final", Decimal::new(17, 0), Decimal::new(60, 0)).unwrap(),
//!     ],
//! );
//! calculator.register_attendance(&mut student, true);
//!
//! let outcome = calculator.calculate_final_grade(&student, Decimal::ZERO).unwrap();
//! assert_eq!(outcome.final_grade, Decimal::new(162, 1));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
