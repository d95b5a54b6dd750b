// Rust guideline compliant 2026-10-18

//! Error types for the dispatch core library.
//!
//! Every domain failure is a variant of [`Error`]. Each variant maps to exactly one
//! [`ErrorCode`], and the code fixes the HTTP status that the boundary layer reports.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes shared by the server and its clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A courier id path parameter failed validation.
    CourierIdInvalid,
    /// An order id failed validation.
    OrderIdInvalid,
    /// A query key appeared more than once.
    QueryDuplicateKey,
    /// A query key is not recognised, or an optional filter is too long.
    QueryUnknownField,
    /// A required query field is missing or blank.
    QueryMissingField,
    /// `page` or `pageSize` is not an integer within bounds.
    QueryPaginationOutOfRange,
    /// `sortField` or `sortDirection` is not one of the allowed values.
    QueryInvalidSort,
    /// An order `status` filter is not one of the allowed values.
    QueryInvalidStatus,
    /// A required payload field is missing or null.
    PayloadMissingField,
    /// A payload field has the wrong type or length.
    PayloadInvalidField,
    /// The payload carries fields that are not part of the schema.
    PayloadUnknownField,
    /// No courier with the requested id exists.
    CourierNotFound,
    /// The courier still has assigned orders.
    CourierDeleteBlockedAssigned,
    /// A stored courier record violates the assignment-count invariant.
    CourierDataIntegrity,
    /// Id generation kept colliding with existing couriers.
    CourierIdConflict,
    /// The roster is at (or beyond) its capacity ceiling.
    CourierCapacityExceeded,
    /// The order is already assigned to a courier.
    CourierOrderAlreadyAssigned,
    /// The courier does not hold the order.
    CourierOrderNotAssigned,
    /// No order with the requested id exists.
    OrderNotFound,
    /// The order's status does not allow courier assignment.
    OrderNotAssignable,
    /// A fallback for unexpected errors.
    InternalError,
}

impl ErrorCode {
    /// Returns the HTTP status associated with the code.
    #[must_use]
    pub fn status(self) -> u16 {
        match self {
            ErrorCode::CourierIdInvalid
            | ErrorCode::OrderIdInvalid
            | ErrorCode::QueryDuplicateKey
            | ErrorCode::QueryUnknownField
            | ErrorCode::QueryMissingField
            | ErrorCode::QueryPaginationOutOfRange
            | ErrorCode::QueryInvalidSort
            | ErrorCode::QueryInvalidStatus
            | ErrorCode::PayloadMissingField
            | ErrorCode::PayloadInvalidField
            | ErrorCode::PayloadUnknownField => 400,
            ErrorCode::CourierNotFound
            | ErrorCode::CourierOrderNotAssigned
            | ErrorCode::OrderNotFound => 404,
            ErrorCode::CourierDeleteBlockedAssigned
            | ErrorCode::CourierIdConflict
            | ErrorCode::CourierCapacityExceeded
            | ErrorCode::CourierOrderAlreadyAssigned
            | ErrorCode::OrderNotAssignable => 409,
            ErrorCode::CourierDataIntegrity | ErrorCode::InternalError => 500,
        }
    }

    /// Returns the wire representation of the code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::CourierIdInvalid => "COURIER_ID_INVALID",
            ErrorCode::OrderIdInvalid => "ORDER_ID_INVALID",
            ErrorCode::QueryDuplicateKey => "QUERY_DUPLICATE_KEY",
            ErrorCode::QueryUnknownField => "QUERY_UNKNOWN_FIELD",
            ErrorCode::QueryMissingField => "QUERY_MISSING_FIELD",
            ErrorCode::QueryPaginationOutOfRange => "QUERY_PAGINATION_OUT_OF_RANGE",
            ErrorCode::QueryInvalidSort => "QUERY_INVALID_SORT",
            ErrorCode::QueryInvalidStatus => "QUERY_INVALID_STATUS",
            ErrorCode::PayloadMissingField => "PAYLOAD_MISSING_FIELD",
            ErrorCode::PayloadInvalidField => "PAYLOAD_INVALID_FIELD",
            ErrorCode::PayloadUnknownField => "PAYLOAD_UNKNOWN_FIELD",
            ErrorCode::CourierNotFound => "COURIER_NOT_FOUND",
            ErrorCode::CourierDeleteBlockedAssigned => "COURIER_DELETE_BLOCKED_ASSIGNED",
            ErrorCode::CourierDataIntegrity => "COURIER_DATA_INTEGRITY",
            ErrorCode::CourierIdConflict => "COURIER_ID_CONFLICT",
            ErrorCode::CourierCapacityExceeded => "COURIER_CAPACITY_EXCEEDED",
            ErrorCode::CourierOrderAlreadyAssigned => "COURIER_ORDER_ALREADY_ASSIGNED",
            ErrorCode::CourierOrderNotAssigned => "COURIER_ORDER_NOT_ASSIGNED",
            ErrorCode::OrderNotFound => "ORDER_NOT_FOUND",
            ErrorCode::OrderNotAssignable => "ORDER_NOT_ASSIGNABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for dispatch operations.
///
/// The `Display` output of the tagged variants is a fixed, client-safe message.
/// Context such as the offending key or id is exposed through [`Error::details`].
#[derive(Debug, Error)]
pub enum Error {
    /// Courier id failed validation.
    #[error("Courier id is invalid.")]
    InvalidCourierId(String),

    /// Order id failed validation.
    #[error("Order id is invalid.")]
    InvalidOrderId(String),

    /// A query key was repeated.
    #[error("Duplicate query key detected.")]
    DuplicateQueryKey(Vec<String>),

    /// A query key is outside the allow-list or an optional filter exceeds its length.
    #[error("Unknown query field.")]
    UnknownQueryField(String),

    /// A required query field is missing or blank.
    #[error("Required query field is missing.")]
    MissingQueryField(String),

    /// Pagination value is not an integer in range.
    #[error("Query pagination is out of range.")]
    PaginationOutOfRange(String),

    /// Sort field or direction is not allowed.
    #[error("Query sort field or direction is invalid.")]
    InvalidSort(String),

    /// Order status filter is not allowed.
    #[error("Query status filter is invalid.")]
    InvalidStatusFilter(String),

    /// Required payload field is missing.
    #[error("Required payload field is missing.")]
    MissingPayloadField(String),

    /// Payload field is invalid.
    #[error("Payload field is invalid.")]
    InvalidPayloadField(String),

    /// Payload has unknown fields.
    #[error("Payload contains unknown fields.")]
    UnknownPayloadField(Vec<String>),

    /// Courier not found.
    #[error("Courier not found.")]
    CourierNotFound(String),

    /// Courier still has assigned orders.
    #[error("Courier has assigned orders.")]
    DeleteBlockedAssigned {
        /// Courier id.
        id: String,
        /// Number of assigned orders.
        assigned: usize,
    },

    /// Stored assignment count disagrees with the assigned order list.
    #[error("Courier data integrity failure.")]
    DataIntegrity {
        /// Courier id.
        id: String,
        /// Count stored on the record.
        stored: usize,
        /// Count derived from the assigned order ids.
        derived: usize,
    },

    /// Id generation exhausted its attempts.
    #[error("Courier id conflict.")]
    IdConflict {
        /// Number of attempts made.
        attempts: usize,
    },

    /// Roster capacity ceiling reached.
    #[error("Courier capacity exceeded.")]
    CapacityExceeded {
        /// Configured capacity.
        capacity: usize,
    },

    /// Order already held by a courier.
    #[error("Order is already assigned to a courier.")]
    OrderAlreadyAssigned {
        /// Order id.
        order_id: String,
        /// Courier currently holding the order.
        courier_id: String,
    },

    /// Order not held by the courier.
    #[error("Order is not assigned to this courier.")]
    OrderNotAssigned {
        /// Order id.
        order_id: String,
        /// Courier id.
        courier_id: String,
    },

    /// Order not found.
    #[error("Order not found.")]
    OrderNotFound(String),

    /// Order status forbids assignment.
    #[error("Order cannot be assigned in its current status.")]
    OrderNotAssignable {
        /// Order id.
        order_id: String,
        /// Current order status.
        status: String,
    },

    /// Error reported by a remote dispatch API.
    #[error("{message}")]
    Remote {
        /// Code reported by the remote side.
        code: ErrorCode,
        /// HTTP status of the response.
        status: u16,
        /// Message reported by the remote side.
        message: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns the stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidCourierId(_) => ErrorCode::CourierIdInvalid,
            Error::InvalidOrderId(_) => ErrorCode::OrderIdInvalid,
            Error::DuplicateQueryKey(_) => ErrorCode::QueryDuplicateKey,
            Error::UnknownQueryField(_) => ErrorCode::QueryUnknownField,
            Error::MissingQueryField(_) => ErrorCode::QueryMissingField,
            Error::PaginationOutOfRange(_) => ErrorCode::QueryPaginationOutOfRange,
            Error::InvalidSort(_) => ErrorCode::QueryInvalidSort,
            Error::InvalidStatusFilter(_) => ErrorCode::QueryInvalidStatus,
            Error::MissingPayloadField(_) => ErrorCode::PayloadMissingField,
            Error::InvalidPayloadField(_) => ErrorCode::PayloadInvalidField,
            Error::UnknownPayloadField(_) => ErrorCode::PayloadUnknownField,
            Error::CourierNotFound(_) => ErrorCode::CourierNotFound,
            Error::DeleteBlockedAssigned { .. } => ErrorCode::CourierDeleteBlockedAssigned,
            Error::DataIntegrity { .. } => ErrorCode::CourierDataIntegrity,
            Error::IdConflict { .. } => ErrorCode::CourierIdConflict,
            Error::CapacityExceeded { .. } => ErrorCode::CourierCapacityExceeded,
            Error::OrderAlreadyAssigned { .. } => ErrorCode::CourierOrderAlreadyAssigned,
            Error::OrderNotAssigned { .. } => ErrorCode::CourierOrderNotAssigned,
            Error::OrderNotFound(_) => ErrorCode::OrderNotFound,
            Error::OrderNotAssignable { .. } => ErrorCode::OrderNotAssignable,
            Error::Remote { code, .. } => *code,
            Error::Config(_) | Error::Io(_) | Error::Json(_) | Error::Internal(_) => {
                ErrorCode::InternalError
            }
        }
    }

    /// Returns the HTTP status for the error.
    ///
    /// Remote errors keep the status reported by the server.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Error::Remote { status, .. } => *status,
            other => other.code().status(),
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::DuplicateQueryKey(keys) => Some(serde_json::json!({ "keys": keys })),
            Error::UnknownQueryField(field)
            | Error::MissingQueryField(field)
            | Error::PaginationOutOfRange(field)
            | Error::InvalidSort(field)
            | Error::InvalidStatusFilter(field)
            | Error::MissingPayloadField(field)
            | Error::InvalidPayloadField(field) => Some(serde_json::json!({ "field": field })),
            Error::UnknownPayloadField(fields) => Some(serde_json::json!({ "fields": fields })),
            Error::CourierNotFound(id) | Error::OrderNotFound(id) => {
                Some(serde_json::json!({ "id": id }))
            }
            Error::DeleteBlockedAssigned { id, assigned } => Some(serde_json::json!({
                "id": id,
                "assignedOrderCount": assigned,
            })),
            Error::DataIntegrity { id, .. } => Some(serde_json::json!({ "id": id })),
            Error::IdConflict { attempts } => Some(serde_json::json!({ "attempts": attempts })),
            Error::CapacityExceeded { capacity } => {
                Some(serde_json::json!({ "capacity": capacity }))
            }
            Error::OrderAlreadyAssigned {
                order_id,
                courier_id,
            }
            | Error::OrderNotAssigned {
                order_id,
                courier_id,
            } => Some(serde_json::json!({
                "orderId": order_id,
                "courierId": courier_id,
            })),
            Error::OrderNotAssignable { order_id, status } => Some(serde_json::json!({
                "orderId": order_id,
                "status": status,
            })),
            _ => None,
        }
    }
}
