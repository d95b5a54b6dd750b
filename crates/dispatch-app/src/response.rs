// Rust guideline compliant 2026-10-18

//! Error envelope shared by the HTTP server and its clients.

use dispatch_core::{Error, ErrorCode};
use serde::{Deserialize, Serialize};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates an envelope from a domain error.
    ///
    /// Untagged failures (io, json, config, internal) are reported as
    /// `INTERNAL_ERROR` without exposing their cause.
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        let code = error.code();
        let message = match code {
            ErrorCode::InternalError if !matches!(error, Error::Remote { .. }) => {
                "Internal server error.".to_string()
            }
            _ => error.to_string(),
        };
        Self {
            code,
            message,
            details: error.details(),
        }
    }

    /// Converts an envelope received over the wire back into an error.
    #[must_use]
    pub fn into_error(self, status: u16) -> Error {
        Error::Remote {
            code: self.code,
            status,
            message: self.message,
        }
    }
}
