//! Evaluation model.
//!
//! This module defines the [`Evaluation`] type, a named, scored and weighted
//! graded item, and [`EvaluationDraft`], its unvalidated input form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The highest score an evaluation can receive (and the grade ceiling).
pub const MAX_SCORE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// The highest weight, in percent, a single evaluation can carry.
pub const MAX_WEIGHT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Unvalidated evaluation data as supplied by a caller.
///
/// Convert into an [`Evaluation`] with `Evaluation::try_from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationDraft {
    /// Name of the evaluation (e.g. "Midterm 1").
    pub name: String,
    /// Score obtained, on the 0-20 scale.
    pub score: Decimal,
    /// Weight in percent of the final grade.
    pub weight: Decimal,
}

impl EvaluationDraft {
    /// Creates a new draft.
    pub fn new(name: impl Into<String>, score: Decimal, weight: Decimal) -> Self {
        Self {
            name: name.into(),
            score,
            weight,
        }
    }
}

/// A graded item with a score and a weight.
///
/// Values are validated once at construction and never change afterwards.
/// Deserialization goes through the same validation.
///
/// # Example
///
/// ```
/// use grade_engine::models::Evaluation;
/// use rust_decimal::Decimal;
///
/// let midterm = Evaluation::new("Midterm", Decimal::new(15, 0), Decimal::new(30, 0)).unwrap();
/// assert_eq!(midterm.weighted_contribution(), Decimal::new(45, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EvaluationDraft")]
pub struct Evaluation {
    name: String,
    score: Decimal,
    weight: Decimal,
}

impl Evaluation {
    /// Creates a validated evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if the name is blank, the score
    /// is outside `[0, 20]` or the weight is outside `[0, 100]`.
    pub fn new(name: impl Into<String>, score: Decimal, weight: Decimal) -> EngineResult<Self> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::validation(
                "evaluation.name",
                "must be a non-empty string",
            ));
        }

        if score < Decimal::ZERO || score > MAX_SCORE {
            return Err(EngineError::validation(
                "evaluation.score",
                format!("must be between 0 and {}, got {}", MAX_SCORE, score),
            ));
        }

        if weight < Decimal::ZERO || weight > MAX_WEIGHT {
            return Err(EngineError::validation(
                "evaluation.weight",
                format!("must be between 0 and {}, got {}", MAX_WEIGHT, weight),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            score,
            weight,
        })
    }

    /// Returns the evaluation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the score on the 0-20 scale.
    pub fn score(&self) -> Decimal {
        self.score
    }

    /// Returns the weight in percent.
    pub fn weight(&self) -> Decimal {
        self.weight
    }

    /// Returns this evaluation's share of the final grade: `score * weight / 100`.
    pub fn weighted_contribution(&self) -> Decimal {
        self.score * self.weight / MAX_WEIGHT
    }
}

impl TryFrom<EvaluationDraft> for Evaluation {
    type Error = EngineError;

    fn try_from(draft: EvaluationDraft) -> EngineResult<Self> {
        Evaluation::new(draft.name, draft.score, draft.weight)
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/20, {}%)", self.name, self.score, self.weight)
    }
}
