//! # Warden Telemetry
//!
//! Structured logging for Warden services, built on `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warden_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//!
//!     // Application code here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `WD_SERVICE_NAME` | `warden` | Service name in log lines |
//! | `WD_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `WD_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `WD_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}
