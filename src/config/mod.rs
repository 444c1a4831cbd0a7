//! Configuration loading and management for the Grade Engine.
//!
//! This module provides the grading rules (pass threshold, weight tolerance,
//! time budget, extra-points limit and attendance percentage) and loads them
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use grade_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/grading.yaml").unwrap();
//! println!("Pass threshold: {}", config.rules().pass_threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MAX_EXTRA_POINTS, DEFAULT_MINIMUM_ATTENDANCE_PERCENTAGE, DEFAULT_PASS_THRESHOLD,
    DEFAULT_TIME_BUDGET_MS, DEFAULT_WEIGHT_TOLERANCE, GradingRules,
};
