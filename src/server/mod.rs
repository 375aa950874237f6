//! Server module for FluxFlow
//!
//! - `config`: environment-based configuration (bind address, CORS, logging
//!   is handled separately via `RUST_LOG`)
//! - `init`: router assembly and the main run loop

pub mod config;
mod init;

pub use config::{load_config, AppConfig};
pub use init::run;
