//! Scheduler task types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Fixed buffer inserted before every scheduled slot, in minutes.
pub const TASK_BUFFER_MINUTES: i64 = 10;

/// Scheduler error types
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    /// Timestamp arithmetic overflowed while packing a task
    #[error("timestamp overflow while packing task '{task_id}'")]
    TimeOverflow {
        /// Id of the task whose slot could not be computed
        task_id: String,
    },
}

/// A task submitted for scheduling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (unique within a single request)
    pub id: String,
    /// Human-readable title; carried through but never consulted by the
    /// ordering logic
    pub title: String,
    /// Estimated duration in minutes (1-480)
    pub estimated_duration_minutes: u32,
    /// Optional deadline. Accepted for forward compatibility but not
    /// consulted by the current algorithm.
    pub deadline: Option<DateTime<Utc>>,
    /// Priority level (1-5, higher = more important)
    pub priority: u8,
}

impl Task {
    /// Create a task with the default priority of 1
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            estimated_duration_minutes: duration_minutes,
            deadline: None,
            priority: 1,
        }
    }

    /// Set task priority
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Set task deadline
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Snapshot of the user's state at scheduling time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserState {
    /// Self-reported energy level (1-10)
    pub energy_level: u8,
    /// The anchor timestamp from which scheduling begins
    pub current_time: DateTime<Utc>,
}

/// One scheduling request: the tasks to place plus the user's state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Tasks to schedule (1-50), in submission order
    pub tasks: Vec<Task>,
    /// Current user state
    pub user_state: UserState,
}

/// A task placed into a concrete time slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Id of the input task this slot belongs to
    pub task_id: String,
    /// Slot start (input anchor or previous slot end, plus the 10-minute
    /// buffer)
    pub start_time: DateTime<Utc>,
    /// Slot end (`start_time + estimated_duration_minutes`)
    pub end_time: DateTime<Utc>,
    /// Heuristic completion likelihood in [0.0, 1.0]
    pub confidence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_task_deserializes_with_optional_fields_absent() {
        let task: Task = serde_json::from_str(
            r#"{"id":"1","title":"Email","estimated_duration_minutes":15,"priority":2}"#,
        )
        .unwrap();
        assert_eq!(task.id, "1");
        assert_eq!(task.estimated_duration_minutes, 15);
        assert!(task.deadline.is_none());
    }

    #[test]
    fn test_scheduled_task_serializes_timestamps_as_rfc3339() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 10, 0).unwrap();
        let slot = ScheduledTask {
            task_id: "1".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::minutes(30),
            confidence_score: 0.8,
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["task_id"], "1");
        assert_eq!(json["start_time"], "2024-03-01T09:10:00Z");
        assert_eq!(json["end_time"], "2024-03-01T09:40:00Z");
    }
}
