//! Web API module for FluxFlow
//!
//! Provides the HTTP surface:
//! - Service status and health endpoints
//! - Schedule prediction
//! - OpenAPI documentation (Swagger UI at /docs)

pub mod docs;
pub mod health;
pub mod schedule;

use axum::Router;

pub use docs::docs_routes;
pub use health::health_routes;
pub use schedule::schedule_routes;

/// Service name reported by the status and health endpoints
pub const SERVICE_NAME: &str = "FluxFlow ML Engine";

/// Create the API router with all endpoints
pub fn api_router() -> Router {
    Router::new()
        .merge(health_routes())
        .merge(schedule_routes())
        .merge(docs_routes())
}
