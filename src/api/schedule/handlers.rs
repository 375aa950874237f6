//! Schedule prediction handler and its error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, info};

use fluxflow_core::{schedule, SchedulerError, ValidationError};

use super::types::{scheduled_to_view, SchedulePayload, ScheduledTaskView};

/// JSON error body, FastAPI-style: a `detail` key holding either field-level
/// validation errors or a plain message
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorDetail {
    Fields(Vec<ValidationError>),
    Message(String),
}

/// Rejection type for the schedule endpoint
pub struct ApiRejection {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiRejection {
    /// Validation failure: 422 with per-field detail
    fn validation(errors: Vec<ValidationError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: ErrorBody {
                detail: ErrorDetail::Fields(errors),
            },
        }
    }

    /// Scheduling failure: 500 with the engine's message attached
    fn scheduling(err: SchedulerError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                detail: ErrorDetail::Message(format!("Scheduling error: {}", err)),
            },
        }
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Predict an optimal schedule from the submitted tasks and user energy.
///
/// Returns the scheduled slots as a bare JSON array, in execution order.
#[utoipa::path(
    post,
    path = "/predict-schedule",
    tag = "schedule",
    request_body = SchedulePayload,
    responses(
        (status = 200, description = "Ordered schedule", body = Vec<ScheduledTaskView>),
        (status = 422, description = "Validation failure with field-level detail"),
        (status = 500, description = "Unexpected scheduling failure")
    )
)]
pub async fn predict_schedule(
    Json(payload): Json<SchedulePayload>,
) -> Result<Json<Vec<ScheduledTaskView>>, ApiRejection> {
    let request = payload.into_request();
    request.validate().map_err(ApiRejection::validation)?;

    // Rejected requests never reach the log; only validated work is recorded
    info!(
        tasks = request.tasks.len(),
        energy_level = request.user_state.energy_level,
        "Scheduling request received"
    );

    let scheduled = schedule(&request.tasks, &request.user_state).map_err(|e| {
        error!(error = %e, "Error scheduling tasks");
        ApiRejection::scheduling(e)
    })?;

    info!(scheduled = scheduled.len(), "Successfully scheduled tasks");
    Ok(Json(scheduled.iter().map(scheduled_to_view).collect()))
}
