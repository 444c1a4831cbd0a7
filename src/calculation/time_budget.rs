//! Post-hoc time budget assertion.
//!
//! The check runs after the work is done; it never interrupts a calculation.

use std::time::Duration;

use crate::error::{EngineError, EngineResult};

/// Fails if `elapsed` is strictly greater than `budget`.
///
/// # Errors
///
/// Returns [`EngineError::Timeout`] with the budget and the measured time.
pub fn enforce_time_budget(elapsed: Duration, budget: Duration) -> EngineResult<()> {
    if elapsed > budget {
        return Err(EngineError::Timeout {
            budget_ms: budget.as_millis() as u64,
            elapsed_us: elapsed.as_micros() as u64,
        });
    }
    Ok(())
}
