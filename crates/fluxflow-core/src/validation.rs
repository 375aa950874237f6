//! Request validation
//!
//! Range and shape checks applied to a [`ScheduleRequest`] before the engine
//! runs. Every violation is reported with a dotted field path so the HTTP
//! layer can surface field-level detail. Validation never short-circuits: a
//! request with several bad fields reports all of them.

use serde::Serialize;

use crate::scheduler::{ScheduleRequest, Task, UserState};

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 200;
/// Duration bounds in minutes
pub const DURATION_RANGE: std::ops::RangeInclusive<u32> = 1..=480;
/// Priority bounds
pub const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=5;
/// Energy level bounds
pub const ENERGY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;
/// Task count bounds per request
pub const TASK_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=50;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `tasks[2].priority`
    pub field: String,
    /// What was wrong with it
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Task {
    /// Validate one task's fields, reporting paths under `tasks[index]`
    pub fn validate(&self, index: usize, errors: &mut Vec<ValidationError>) {
        let path = |field: &str| format!("tasks[{}].{}", index, field);

        if self.id.is_empty() {
            errors.push(ValidationError::new(path("id"), "id must not be empty"));
        }
        let title_chars = self.title.chars().count();
        if title_chars == 0 || title_chars > TITLE_MAX_CHARS {
            errors.push(ValidationError::new(
                path("title"),
                format!("title must be 1-{} characters", TITLE_MAX_CHARS),
            ));
        }
        if !DURATION_RANGE.contains(&self.estimated_duration_minutes) {
            errors.push(ValidationError::new(
                path("estimated_duration_minutes"),
                format!(
                    "duration must be {}-{} minutes",
                    DURATION_RANGE.start(),
                    DURATION_RANGE.end()
                ),
            ));
        }
        if !PRIORITY_RANGE.contains(&self.priority) {
            errors.push(ValidationError::new(
                path("priority"),
                format!(
                    "priority must be {}-{}",
                    PRIORITY_RANGE.start(),
                    PRIORITY_RANGE.end()
                ),
            ));
        }
    }
}

impl UserState {
    /// Validate the user state fields
    pub fn validate(&self, errors: &mut Vec<ValidationError>) {
        if !ENERGY_RANGE.contains(&self.energy_level) {
            errors.push(ValidationError::new(
                "user_state.energy_level",
                format!(
                    "energy level must be {}-{}",
                    ENERGY_RANGE.start(),
                    ENERGY_RANGE.end()
                ),
            ));
        }
    }
}

impl ScheduleRequest {
    /// Validate the whole request, collecting every violation.
    ///
    /// Checks the task count bound, per-task fields, id uniqueness within
    /// the request, and the user state.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !TASK_COUNT_RANGE.contains(&self.tasks.len()) {
            errors.push(ValidationError::new(
                "tasks",
                format!(
                    "request must contain {}-{} tasks, got {}",
                    TASK_COUNT_RANGE.start(),
                    TASK_COUNT_RANGE.end(),
                    self.tasks.len()
                ),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for (index, task) in self.tasks.iter().enumerate() {
            task.validate(index, &mut errors);
            if !task.id.is_empty() && !seen.insert(task.id.as_str()) {
                errors.push(ValidationError::new(
                    format!("tasks[{}].id", index),
                    format!("duplicate task id '{}'", task.id),
                ));
            }
        }

        self.user_state.validate(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
