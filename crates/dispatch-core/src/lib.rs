// Rust guideline compliant 2026-10-18

//! Dispatch Core Library
//!
//! This crate provides the foundational components for the courier dispatch backend:
//! - Data models (Courier, list filters, paginated results)
//! - Orders with status timelines, and the order book
//! - Error taxonomy with stable codes and HTTP statuses
//! - Roster store with capacity and assignment-count invariants
//! - Courier id generation
//! - Configuration loading

pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod orders;
pub mod roster;

pub use config::Config;
pub use error::{Error, ErrorCode, Result};
pub use identity::{HashIdGenerator, IdGenerator};
pub use models::{
    Courier, CourierId, CouriersListFilters, CreateCourierInput, OrderId, Paginated, SortDirection,
    SortField,
};
pub use orders::{Order, OrderBook, OrderEvent, OrderSort, OrderStatus, OrdersListFilters};
pub use roster::{enforce_invariant, Roster, MAX_COURIERS};
