//! Teacher model.

use serde::Serialize;

use super::student::non_blank;
use crate::error::EngineResult;

/// The instructor a calculator session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Teacher {
    teacher_id: String,
    name: String,
}

impl Teacher {
    /// Creates a teacher.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Validation`] if the id or name is blank.
    pub fn new(teacher_id: impl Into<String>, name: impl Into<String>) -> EngineResult<Self> {
        Ok(Self {
            teacher_id: non_blank(teacher_id.into(), "teacher.teacher_id")?,
            name: non_blank(name.into(), "teacher.name")?,
        })
    }

    /// Returns the teacher identifier.
    pub fn teacher_id(&self) -> &str {
        &self.teacher_id
    }

    /// Returns the teacher name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
