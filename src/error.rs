//! Error types for the Grade Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating inputs and
//! computing final grades.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminant describing what kind of failure caused a grade calculation
/// to fail.
///
/// Carried by [`EngineError::Calculation`] so callers can branch on the
/// cause without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Malformed or out-of-range input.
    Validation,
    /// The evaluation cap was exceeded.
    Capacity,
    /// Evaluation weights did not sum to 100%.
    WeightSum,
    /// The calculation exceeded its time budget.
    Timeout,
    /// Any other failure.
    Unknown,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FailureKind::Validation => "validation",
            FailureKind::Capacity => "capacity",
            FailureKind::WeightSum => "weight_sum",
            FailureKind::Timeout => "timeout",
            FailureKind::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// The main error type for the Grade Engine.
///
/// All operations in the engine return this error type. Failures raised
/// inside a grade calculation are wrapped into [`EngineError::Calculation`],
/// which keeps the original error as its source.
///
/// # Example
///
/// ```
/// use grade_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "evaluation.score".to_string(),
///     message: "must be between 0 and 20, got 25".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid evaluation.score: must be between 0 and 20, got 25"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input value was malformed or out of range.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A student already holds the maximum number of evaluations.
    #[error("Student '{student_id}' already holds the maximum of {max} evaluations")]
    CapacityExceeded {
        /// The student whose evaluation list is full.
        student_id: String,
        /// The evaluation cap.
        max: usize,
    },

    /// Evaluation weights do not form a complete partition of the grade.
    #[error("Evaluation weights must sum to 100%, currently they sum to {total}%")]
    WeightSum {
        /// The actual sum of the weights.
        total: Decimal,
    },

    /// The calculation took longer than its time budget.
    #[error("Calculation exceeded the {budget_ms}ms time budget (took {elapsed_us}us)")]
    Timeout {
        /// The configured budget in milliseconds.
        budget_ms: u64,
        /// The measured duration in microseconds.
        elapsed_us: u64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid grading rules: {message}")]
    InvalidRules {
        /// A description of the offending rule.
        message: String,
    },

    /// A grade calculation failed.
    #[error("Grade calculation failed: {source} (elapsed: {elapsed_us}us)")]
    Calculation {
        /// What kind of failure caused the calculation to fail.
        kind: FailureKind,
        /// Time spent before the failure, in microseconds.
        elapsed_us: u64,
        /// The original error.
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Creates a validation error for the given field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the failure discriminant of this error.
    ///
    /// For a wrapped [`EngineError::Calculation`] this is the kind of the
    /// original cause.
    pub fn kind(&self) -> FailureKind {
        match self {
            EngineError::Validation { .. } => FailureKind::Validation,
            EngineError::CapacityExceeded { .. } => FailureKind::Capacity,
            EngineError::WeightSum { .. } => FailureKind::WeightSum,
            EngineError::Timeout { .. } => FailureKind::Timeout,
            EngineError::Calculation { kind, .. } => *kind,
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidRules { .. } => FailureKind::Unknown,
        }
    }

    /// Returns the innermost error, unwrapping any calculation wrapper.
    pub fn root_cause(&self) -> &EngineError {
        match self {
            EngineError::Calculation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
