//! Core data models for the Grade Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_detail;
mod calculation_result;
mod evaluation;
mod student;
mod teacher;

pub use calculation_detail::{
    AttendanceDetail, BaseCalculation, CalculationDetail, CalculationMetadata, EvaluationLine,
    ExtraPointsDetail, FinalResult, StudentInfo,
};
pub use calculation_result::{
    AttendanceConfirmation, AuditStep, AuditTrace, AuditWarning, GradeOutcome,
    PolicyConfirmation, RegistrationSummary,
};
pub use evaluation::{Evaluation, EvaluationDraft, MAX_SCORE, MAX_WEIGHT};
pub use student::{MAX_EVALUATIONS, Student};
pub use teacher::Teacher;
