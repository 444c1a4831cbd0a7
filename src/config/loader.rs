//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading grading rules
//! from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::GradingRules;

/// Loads and provides access to grading rules.
///
/// The configuration file is a flat YAML mapping; omitted keys take their
/// default values:
///
/// ```text
/// pass_threshold: 10.5
/// weight_tolerance: 0.01
/// time_budget_ms: 300
/// max_extra_points: 2.0
/// enforce_extra_points_limit: false
/// minimum_attendance_percentage: 70
/// ```
///
/// # Example
///
/// ```no_run
/// use grade_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/grading.yaml")?;
/// println!("Pass threshold: {}", loader.rules().pass_threshold);
/// # Ok::<(), grade_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: GradingRules,
}

impl ConfigLoader {
    /// Loads grading rules from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or unknown keys
    /// - A rule is outside the grade or weight scale
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        debug!(path = %path_str, "Loaded grading rules");
        Ok(loader)
    }

    /// Parses grading rules from YAML text.
    ///
    /// `source` is only used to label errors.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        // An empty document means "all defaults".
        let rules = if content.trim().is_empty() {
            GradingRules::default()
        } else {
            serde_yaml::from_str::<GradingRules>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        rules.validate()?;
        Ok(Self { rules })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &GradingRules {
        &self.rules
    }

    /// Consumes the loader and returns the rules.
    pub fn into_rules(self) -> GradingRules {
        self.rules
    }
}
