// Rust guideline compliant 2026-10-18

//! HTTP boundary for the courier dispatch backend.
//!
//! Exposes the roster under `/api/couriers` using axum. Every request is
//! delayed by the configured latency, then runs to completion under a single
//! roster lock.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{api_router, app};
pub use server::{run, serve, ServerError, ServerOptions};
pub use state::AppState;
