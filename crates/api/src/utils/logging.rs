use std::time::Duration;

use shiftboard_domain::ShiftboardError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,shiftboard=debug";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. `SHIFTBOARD_LOG_FORMAT=json`
/// switches to one JSON object per line.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json = std::env::var("SHIFTBOARD_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let result = if json { builder.json().try_init() } else { builder.try_init() };

    if let Err(err) = result {
        warn!(error = %err, "tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"store::fetch_uploads"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `ShiftboardError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ShiftboardError) -> &'static str {
    match error {
        ShiftboardError::Config(_) => "config",
        ShiftboardError::Network(_) => "network",
        ShiftboardError::Auth(_) => "auth",
        ShiftboardError::NotFound(_) => "not_found",
        ShiftboardError::InvalidInput(_) => "invalid_input",
        ShiftboardError::Storage(_) => "storage",
        ShiftboardError::Parse(_) => "parse",
        ShiftboardError::Internal(_) => "internal",
    }
}
