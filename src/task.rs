//! Task domain types and errors.
//!
//! A task is the single persisted entity: a title, a free-form description,
//! a UTC due date and a completion flag. The store assigns the id on insert;
//! updates replace every mutable field at once (no partial patches).

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A stored task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Store-assigned identifier, immutable after insert
    pub id: i64,

    /// Task title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Due date as a UTC instant
    pub due_date: DateTime<Utc>,

    /// Completion flag, only settable via explicit update
    pub completed: bool,
}

/// Fields for creating a task. `completed` always starts false.
#[derive(Debug, Clone)]
pub struct TaskCreate {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}

/// Full replacement for a task's mutable fields.
#[derive(Debug, Clone)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
}

/// Errors raised by the task layers.
///
/// Errors are raised at the point of detection and propagate unchanged
/// through service and facade; only the HTTP boundary maps them to a
/// status code.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Input failed validation; carries every violated constraint.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// No task row with the requested id.
    #[error("Task with id = {id} not found")]
    NotFound { id: i64 },

    /// Underlying storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_id() {
        let err = TaskError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "Task with id = 42 not found");
    }

    #[test]
    fn test_validation_message_joins_all_violations() {
        let err = TaskError::Validation(vec![
            "title must not be blank".to_string(),
            "direction must be ASC or DESC, got: SIDEWAYS".to_string(),
        ]);
        let message = err.to_string();
        assert!(message.contains("title must not be blank"));
        assert!(message.contains("SIDEWAYS"));
    }
}
