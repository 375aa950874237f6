//! Wire types for the schedule prediction endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use fluxflow_core::{ScheduleRequest, ScheduledTask, Task, UserState};

/// A task as submitted for scheduling
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TaskPayload {
    /// Unique task identifier (non-empty, unique within the request)
    pub id: String,
    /// Task title (1-200 characters)
    pub title: String,
    /// Estimated duration in minutes (1-480)
    pub estimated_duration_minutes: u32,
    /// Optional deadline (accepted but not consulted by the algorithm)
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Priority level (1-5)
    #[serde(default = "default_priority")]
    pub priority: u8,
}

pub(crate) fn default_priority() -> u8 {
    1
}

/// The user's state at request time
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserStatePayload {
    /// Energy level (1-10)
    pub energy_level: u8,
    /// Current timestamp - the anchor from which scheduling begins
    pub current_time: DateTime<Utc>,
}

/// Request body for `/predict-schedule`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SchedulePayload {
    /// Tasks to schedule (1-50)
    pub tasks: Vec<TaskPayload>,
    /// Current user state
    pub user_state: UserStatePayload,
}

/// A scheduled slot in the response
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduledTaskView {
    pub task_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub confidence_score: f64,
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        Task {
            id: payload.id,
            title: payload.title,
            estimated_duration_minutes: payload.estimated_duration_minutes,
            deadline: payload.deadline,
            priority: payload.priority,
        }
    }
}

impl From<UserStatePayload> for UserState {
    fn from(payload: UserStatePayload) -> Self {
        UserState {
            energy_level: payload.energy_level,
            current_time: payload.current_time,
        }
    }
}

impl SchedulePayload {
    /// Convert the wire payload into a core scheduling request
    pub fn into_request(self) -> ScheduleRequest {
        ScheduleRequest {
            tasks: self.tasks.into_iter().map(Task::from).collect(),
            user_state: self.user_state.into(),
        }
    }
}

/// Convert an engine result to its API view
pub fn scheduled_to_view(task: &ScheduledTask) -> ScheduledTaskView {
    ScheduledTaskView {
        task_id: task.task_id.clone(),
        start_time: task.start_time,
        end_time: task.end_time,
        confidence_score: task.confidence_score,
    }
}
