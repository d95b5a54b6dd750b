// Rust guideline compliant 2026-10-18

//! Conversion of domain errors into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dispatch_app::ErrorEnvelope;
use dispatch_core::Error;
use tracing::{error, warn};

/// Error returned by request handlers.
///
/// Renders as the error envelope with the status fixed by the error code.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = ErrorEnvelope::from_error(&self.0);

        if status.is_server_error() {
            error!(code = %envelope.code, error = %self.0, "request failed");
        } else {
            warn!(code = %envelope.code, "request rejected");
        }

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_error_code() {
        let cases = [
            (Error::InvalidCourierId("c 1".to_string()), StatusCode::BAD_REQUEST),
            (Error::CourierNotFound("c-9".to_string()), StatusCode::NOT_FOUND),
            (
                Error::DeleteBlockedAssigned {
                    id: "c-2".to_string(),
                    assigned: 1,
                },
                StatusCode::CONFLICT,
            ),
            (
                Error::DataIntegrity {
                    id: "c-2".to_string(),
                    stored: 2,
                    derived: 1,
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Error::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(ApiError(error).into_response().status(), expected);
        }
    }
}
