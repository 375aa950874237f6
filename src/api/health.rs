//! Service status and health check endpoints
//!
//! Provides:
//! - `/` — service status + version
//! - `/health` — liveness check with a timestamp (for monitoring)

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::SERVICE_NAME;

/// Service status response
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
}

/// Root endpoint - service status
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service status", body = StatusResponse)
    )
)]
pub async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check endpoint for monitoring
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        service: SERVICE_NAME,
    })
}

/// Create status and health routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(service_status))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_service_status() {
        let Json(body) = service_status().await;
        assert_eq!(body.status, "online");
        assert_eq!(body.service, "FluxFlow ML Engine");
        assert!(!body.version.is_empty());
    }

    #[tokio::test]
    async fn test_health_check() {
        let before = Utc::now();
        let Json(body) = health_check().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "FluxFlow ML Engine");
        assert!(body.timestamp >= before);
    }

    #[test]
    fn test_health_response_serialization() {
        let resp = HealthResponse {
            status: "healthy",
            timestamp: Utc::now(),
            service: SERVICE_NAME,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "FluxFlow ML Engine");
        // chrono serializes DateTime<Utc> as an ISO-8601 / RFC 3339 string
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }
}
