//! Schedule prediction endpoint
//!
//! POST /predict-schedule - Order tasks into time slots by energy level

pub mod handlers;
pub mod types;


pub use handlers::predict_schedule;
pub use types::{SchedulePayload, ScheduledTaskView, TaskPayload, UserStatePayload};

use axum::{routing::post, Router};

/// Create schedule routes
pub fn schedule_routes() -> Router {
    Router::new().route("/predict-schedule", post(predict_schedule))
}
