//! API-specific error types

use shiftboard_domain::ShiftboardError;
use thiserror::Error;

use crate::errors::status_to_error;

/// Platform request failures
#[derive(Debug, Error)]
pub enum ApiError {
    /// The platform answered with a non-success status.
    #[error("API request failed with status {status}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(ShiftboardError),

    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Upstream HTTP status, if the platform answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl From<ShiftboardError> for ApiError {
    fn from(err: ShiftboardError) -> Self {
        Self::Transport(err)
    }
}

impl From<ApiError> for ShiftboardError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, .. } => status_to_error(status, err.to_string()),
            ApiError::Transport(inner) => inner,
            ApiError::Decode(message) => ShiftboardError::Parse(message),
        }
    }
}
