// Rust guideline compliant 2026-10-18

//! Shared application services for the dispatch backend.
//!
//! This crate provides the request-facing pieces that sit on top of the roster:
//! query and payload validation, the list engine, the mutation engine, order
//! listing and assignment, error envelopes, and the `CouriersApi`/`OrdersApi`
//! adapter seams.

pub mod api;
pub mod list;
pub mod mutation;
pub mod orders;
pub mod payload;
pub mod query;
pub mod response;

pub use api::{CouriersApi, InProcessApi, OrdersApi};
pub use dispatch_core::{Error, ErrorCode, Result};
pub use list::{get_courier, list_couriers};
pub use mutation::{assign_order, create_courier, remove_courier, unassign_order, CreateOptions};
pub use orders::{assign_courier, get_order, link_order, list_orders, unlink_order};
pub use payload::{
    parse_assign_courier_input, parse_assign_order_input, parse_courier_id,
    parse_create_courier_input, parse_order_id, validate_create_input,
};
pub use query::{
    normalize_filters, normalize_order_filters, parse_couriers_list_filters,
    parse_orders_list_filters,
};
pub use response::ErrorEnvelope;
