// Rust guideline compliant 2026-10-18

//! Delivery orders and the order book.
//!
//! An order records which courier carries it and keeps a newest-first timeline
//! of status changes. Courier-side assignment lists live on the roster; the
//! services in `dispatch-app` keep both sides in step.

use crate::{CourierId, Error, OrderId, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed and waiting for a courier.
    Created,
    /// Assigned to a courier.
    Assigned,
    /// Collected by the courier.
    PickedUp,
    /// Delivered to the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Created,
        OrderStatus::Assigned,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Returns the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Assigned => "assigned",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true if a courier may be (re)assigned in this status.
    pub fn is_assignable(self) -> bool {
        matches!(self, OrderStatus::Created | OrderStatus::Assigned)
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| Error::InvalidStatusFilter("status".to_string()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in an order's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    /// When the change happened.
    pub at: DateTime<Utc>,
    /// Status after the change.
    pub status: OrderStatus,
    /// Human-readable note.
    pub note: String,
}

/// A delivery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Customer-facing tracking code.
    pub tracking_id: String,
    /// Customer display name.
    pub customer_name: String,
    /// Current status.
    pub status: OrderStatus,
    /// Courier carrying the order, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_id: Option<CourierId>,
    /// Estimated delivery time.
    pub eta: DateTime<Utc>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Status changes, newest first.
    #[serde(default)]
    pub events: Vec<OrderEvent>,
}

impl Order {
    /// Sets the status and prepends a timeline event.
    pub fn record(&mut self, status: OrderStatus, note: impl Into<String>, at: DateTime<Utc>) {
        self.status = status;
        self.events.insert(
            0,
            OrderEvent {
                at,
                status,
                note: note.into(),
            },
        );
    }
}

/// Sort order for order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSort {
    /// Soonest ETA first.
    #[default]
    Eta,
    /// Most recently created first.
    CreatedAt,
}

impl OrderSort {
    /// Returns the query-string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSort::Eta => "eta",
            OrderSort::CreatedAt => "createdAt",
        }
    }
}

impl FromStr for OrderSort {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "eta" => Ok(OrderSort::Eta),
            "createdAt" => Ok(OrderSort::CreatedAt),
            _ => Err(Error::InvalidSort("sort".to_string())),
        }
    }
}

impl fmt::Display for OrderSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated filters for listing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersListFilters {
    /// One-based page number (1-1000).
    pub page: u32,
    /// Page size (1-100).
    pub page_size: u32,
    /// Case-insensitive match against tracking id or customer name.
    pub q: String,
    /// Status to keep; `None` keeps every status.
    pub status: Option<OrderStatus>,
    /// Sort order.
    pub sort: OrderSort,
}

impl Default for OrdersListFilters {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            q: String::new(),
            status: None,
            sort: OrderSort::default(),
        }
    }
}

impl OrdersListFilters {
    /// Renders the filters as query-string pairs.
    ///
    /// `q` and `status` are omitted when they do not filter anything.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ];
        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

/// Ordered collection of orders.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Creates an empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an order book from existing records.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Creates the demo orders matching [`crate::Roster::demo`].
    ///
    /// Only `o-1` is held by a courier (`c-2`).
    pub fn demo() -> Self {
        let now = Utc::now();
        let order = |id: &str, tracking: &str, customer: &str, created_ago: i64, eta_in: i64| {
            let created_at = now - Duration::minutes(created_ago);
            Order {
                id: OrderId::new(id),
                tracking_id: tracking.to_string(),
                customer_name: customer.to_string(),
                status: OrderStatus::Created,
                courier_id: None,
                eta: now + Duration::minutes(eta_in),
                created_at,
                events: vec![OrderEvent {
                    at: created_at,
                    status: OrderStatus::Created,
                    note: "Order created".to_string(),
                }],
            }
        };

        let mut first = order("o-1", "TRK-1001", "Dana Whitfield", 90, 20);
        first.courier_id = Some(CourierId::new("c-2"));
        first.record(
            OrderStatus::Assigned,
            "Assigned to courier c-2",
            now - Duration::minutes(60),
        );

        let mut cancelled = order("o-4", "TRK-1004", "Lee Varga", 120, 10);
        cancelled.record(
            OrderStatus::Cancelled,
            "Cancelled by customer",
            now - Duration::minutes(100),
        );

        Self::from_orders(vec![
            first,
            order("o-2", "TRK-1002", "Morgan Patel", 45, 50),
            order("o-3", "TRK-1003", "Sam Okafor", 30, 35),
            cancelled,
        ])
    }

    /// Returns the number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns the records in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns the order with `id`, if tracked.
    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// Looks up an order by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::OrderNotFound` if absent.
    pub fn get(&self, id: &OrderId) -> Result<&Order> {
        self.find(id)
            .ok_or_else(|| Error::OrderNotFound(id.to_string()))
    }

    /// Looks up an order for mutation.
    ///
    /// # Errors
    ///
    /// Returns `Error::OrderNotFound` if absent.
    pub fn get_mut(&mut self, id: &OrderId) -> Result<&mut Order> {
        self.orders
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| Error::OrderNotFound(id.to_string()))
    }

    /// Appends an order.
    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::PickedUp).unwrap(),
            "picked_up"
        );
        assert_eq!("cancelled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("all".parse::<OrderStatus>().is_err());
        assert!("Created".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_record_prepends_event() {
        let mut book = OrderBook::demo();
        let order = book.get_mut(&OrderId::new("o-2")).unwrap();
        let at = order.created_at + Duration::minutes(5);
        order.record(OrderStatus::Assigned, "Assigned to courier c-1", at);

        assert_eq!(order.status, OrderStatus::Assigned);
        assert_eq!(order.events.len(), 2);
        assert_eq!(order.events[0].note, "Assigned to courier c-1");
        assert_eq!(order.events[1].status, OrderStatus::Created);
    }

    #[test]
    fn test_demo_book_matches_roster() {
        let book = OrderBook::demo();
        let held: Vec<&str> = book
            .orders()
            .iter()
            .filter(|order| order.courier_id.is_some())
            .map(|order| order.id.as_str())
            .collect();
        assert_eq!(held, ["o-1"]);
        assert_eq!(book.get(&OrderId::new("o-4")).unwrap().status, OrderStatus::Cancelled);
        assert!(book.get(&OrderId::new("o-9")).is_err());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let book = OrderBook::demo();
        let json = serde_json::to_value(book.get(&OrderId::new("o-1")).unwrap()).unwrap();
        assert_eq!(json["trackingId"], "TRK-1001");
        assert_eq!(json["courierId"], "c-2");
        assert_eq!(json["status"], "assigned");
        assert_eq!(json["events"][0]["status"], "assigned");
        assert!(json["createdAt"].is_string());

        let unassigned = serde_json::to_value(book.get(&OrderId::new("o-2")).unwrap()).unwrap();
        assert!(unassigned.get("courierId").is_none());
    }

    #[test]
    fn test_query_pairs_omit_unfiltered_fields() {
        let filters = OrdersListFilters::default();
        let keys: Vec<&str> = filters.to_query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["page", "pageSize", "sort"]);

        let filters = OrdersListFilters {
            q: "trk".to_string(),
            status: Some(OrderStatus::PickedUp),
            ..OrdersListFilters::default()
        };
        let pairs = filters.to_query_pairs();
        assert!(pairs.contains(&("status", "picked_up".to_string())));
        assert!(pairs.contains(&("q", "trk".to_string())));
    }
}
