//! Structured logging.
//!
//! Every security event shares a fixed shape so log pipelines can filter on it:
//! - `target`: always `security`
//! - `module`: component that raised the event
//! - `message`: human readable summary
//! - additional context fields

use tracing_subscriber::EnvFilter;

use crate::{TelemetryConfig, TelemetryError};

/// Install the global fmt subscriber.
///
/// Only the first call in a process succeeds; later calls return
/// `TelemetryError::AlreadyInitialized` and leave the installed subscriber
/// untouched.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| {
        TelemetryError::Config(format!("invalid log level '{}': {e}", config.log_level))
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match (config.json_logs, config.console_output) {
        (true, true) => builder.json().try_init(),
        (false, true) => builder.try_init(),
        (true, false) => builder.json().with_writer(std::io::sink).try_init(),
        (false, false) => builder.with_writer(std::io::sink).try_init(),
    };
    installed.map_err(|_| TelemetryError::AlreadyInitialized)?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        log_level = %config.log_level,
        "Logging initialized"
    );

    Ok(())
}

/// Log a security event with the standard fields.
///
/// ```
/// use warden_telemetry::security_event;
///
/// let user_id = 42;
/// security_event!(warn, "Authenticator", "Login throttled", user_id = user_id);
/// security_event!(error, "Randomizer", "Generator unavailable");
/// ```
#[macro_export]
macro_rules! security_event {
    ($level:ident, $module:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            target: "security",
            module = $module,
            $($($field)*,)?
            $msg
        )
    };
}
