//! Mapping of I/O, JSON and HTTP failures onto [`ShiftboardError`]

use std::io::{Error as IoError, ErrorKind};

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use shiftboard_domain::ShiftboardError;

/// Domain error produced at the infrastructure boundary.
///
/// Adapters convert foreign errors into this newtype with `?` and hand the
/// inner [`ShiftboardError`] to the core.
#[derive(Debug)]
pub struct InfraError(pub ShiftboardError);

impl From<InfraError> for ShiftboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShiftboardError> for InfraError {
    fn from(value: ShiftboardError) -> Self {
        Self(value)
    }
}

// State files: a missing file is "not found", anything else is storage.
impl From<IoError> for InfraError {
    fn from(err: IoError) -> Self {
        Self(match err.kind() {
            ErrorKind::NotFound => ShiftboardError::NotFound(format!("state file missing: {err}")),
            ErrorKind::PermissionDenied => {
                ShiftboardError::Storage(format!("state file not accessible: {err}"))
            }
            _ => ShiftboardError::Storage(err.to_string()),
        })
    }
}

impl From<JsonError> for InfraError {
    fn from(err: JsonError) -> Self {
        Self(if err.is_io() {
            ShiftboardError::Storage(format!("failed to read JSON: {err}"))
        } else {
            ShiftboardError::Parse(format!("invalid JSON at line {}: {err}", err.line()))
        })
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        Self(http_error(&err))
    }
}

fn http_error(err: &HttpError) -> ShiftboardError {
    if err.is_timeout() {
        return ShiftboardError::Network("HTTP request timed out".into());
    }
    if err.is_connect() {
        return ShiftboardError::Network("HTTP connection failure".into());
    }
    if err.is_decode() {
        return ShiftboardError::Parse(format!("failed to decode HTTP response: {err}"));
    }
    match err.status() {
        Some(status) => status_to_error(
            status.as_u16(),
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ),
        ),
        None => ShiftboardError::Network(err.to_string()),
    }
}

/// Classify a non-success HTTP status.
pub(crate) fn status_to_error(code: u16, message: String) -> ShiftboardError {
    match code {
        401 | 403 => ShiftboardError::Auth(message),
        404 => ShiftboardError::NotFound(message),
        429 => ShiftboardError::Network(message),
        400..=499 => ShiftboardError::InvalidInput(message),
        _ => ShiftboardError::Network(message),
    }
}
