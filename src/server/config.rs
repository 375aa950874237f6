//! Configuration loading
//!
//! All configuration comes from the process environment (after an optional
//! `.env` file, loaded in `main`). Variables use the `FLUXFLOW_` prefix with
//! `__` separating sections, e.g. `FLUXFLOW_SERVER__PORT=9000` or
//! `FLUXFLOW_CORS__ALLOWED_ORIGINS=https://app.example.com`. There is no
//! file-based configuration.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use config::{Config, Environment};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// HTTP server bind settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Cross-origin request settings
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or `*` for any origin
    #[serde(default = "default_origins")]
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_origins(),
        }
    }
}

fn default_origins() -> String {
    "*".to_string()
}

impl CorsConfig {
    /// Build the CORS layer for the configured origins
    pub fn layer(&self) -> CorsLayer {
        if self.allowed_origins.trim() == "*" {
            return CorsLayer::permissive();
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin, "ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Load configuration from the environment
pub fn load_config() -> Result<AppConfig> {
    let config = Config::builder()
        // prefix_separator("_") ensures FLUXFLOW_SERVER__PORT works (single
        // _ after prefix); the default would require FLUXFLOW__SERVER__PORT.
        .add_source(
            Environment::with_prefix("FLUXFLOW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}
