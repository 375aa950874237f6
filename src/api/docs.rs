//! API Documentation - Swagger UI
//!
//! Provides OpenAPI documentation at /docs

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::health::{HealthResponse, StatusResponse};
use super::schedule::{SchedulePayload, ScheduledTaskView, TaskPayload, UserStatePayload};

/// FluxFlow API OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FluxFlow ML Service",
        version = "1.0.0",
        description = "Energy-aware adaptive scheduling service.

## Overview
Submit a list of tasks together with your current energy level and receive a
proposed ordering of those tasks into sequential time slots, each with a
confidence score:
- **High energy (8-10)**: demanding tasks are scheduled first
- **Medium energy (4-7)**: priority is balanced against effort
- **Low energy (1-3)**: quick wins come first

Slots are packed sequentially with a fixed 10-minute buffer before each task.
",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        crate::api::health::service_status,
        crate::api::health::health_check,
        crate::api::schedule::handlers::predict_schedule,
    ),
    components(
        schemas(
            StatusResponse,
            HealthResponse,
            SchedulePayload,
            TaskPayload,
            UserStatePayload,
            ScheduledTaskView,
        )
    ),
    tags(
        (name = "health", description = "Service status and liveness"),
        (name = "schedule", description = "Energy-aware schedule prediction"),
    )
)]
pub struct ApiDoc;

/// Create documentation routes
pub fn docs_routes() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
