//! Error responses shared by all routes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use shiftboard_domain::ShiftboardError;
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::logging::error_label;

/// JSON body of every error response: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Failures a route reports to the dashboard
#[derive(Debug, Error)]
pub enum CommandError {
    /// The vendor platform answered with a non-success status; relayed as is.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Anything else; the message is what the dashboard shows.
    #[error("{message}")]
    Internal { message: String, cause: ShiftboardError },
}

impl CommandError {
    pub fn internal(message: impl Into<String>, cause: ShiftboardError) -> Self {
        Self::Internal { message: message.into(), cause }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal { message, cause } => {
                error!(error = %cause, kind = error_label(cause), detail = %message, "command failed");
            }
            Self::Upstream { status, message } => {
                warn!(status = *status, detail = %message, "upstream rejected request")
            }
            Self::NotFound(message) | Self::BadRequest(message) => {
                warn!(status = status.as_u16(), detail = %message, "request rejected")
            }
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
