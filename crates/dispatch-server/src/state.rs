// Rust guideline compliant 2026-10-18

//! Shared state for request handlers.

use dispatch_app::{CreateOptions, InProcessApi};
use dispatch_core::{Error, OrderBook, Result, Roster};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    api: Arc<Mutex<InProcessApi>>,
    latency: Duration,
}

impl AppState {
    /// Creates state around an in-process backend.
    pub fn new(api: InProcessApi, latency: Duration) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
            latency,
        }
    }

    /// Creates state with an empty roster, or the demo couriers and orders.
    pub fn with_roster(seed_demo_data: bool, id_max_attempts: usize, latency: Duration) -> Self {
        let (roster, orders) = if seed_demo_data {
            (Roster::demo(), OrderBook::demo())
        } else {
            (Roster::new(), OrderBook::new())
        };
        Self::new(
            InProcessApi::new(roster, CreateOptions::new(id_max_attempts)).with_orders(orders),
            latency,
        )
    }

    /// Waits for the simulated network latency.
    pub async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Runs `operation` with exclusive access to the backend.
    ///
    /// The lock is never held across an await point.
    ///
    /// # Errors
    ///
    /// Returns the operation's error, or `Error::Internal` if the lock is poisoned.
    pub fn with_api<T>(&self, operation: impl FnOnce(&mut InProcessApi) -> Result<T>) -> Result<T> {
        let mut api = self
            .api
            .lock()
            .map_err(|_| Error::Internal("roster lock poisoned".to_string()))?;
        operation(&mut api)
    }
}
