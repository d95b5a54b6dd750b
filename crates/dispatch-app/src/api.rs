// Rust guideline compliant 2026-10-18

//! The `CouriersApi` and `OrdersApi` seams and their in-process implementation.
//!
//! Front ends program against these traits so the same command code can run
//! against a local roster or a remote server.

use crate::list::{get_courier, list_couriers};
use crate::mutation::{create_courier, remove_courier, CreateOptions};
use crate::orders::{assign_courier, get_order, link_order, list_orders, unlink_order};
use crate::payload::{parse_courier_id, parse_order_id, validate_create_input};
use crate::query::{normalize_filters, normalize_order_filters};
use dispatch_core::{
    Courier, CouriersListFilters, CreateCourierInput, Order, OrderBook, OrdersListFilters,
    Paginated, Result, Roster,
};

/// Operations exposed by a courier dispatch backend.
///
/// Ids are passed as raw strings and validated by the implementation.
pub trait CouriersApi {
    /// Lists couriers matching `filters`.
    fn list(&mut self, filters: &CouriersListFilters) -> Result<Paginated<Courier>>;

    /// Loads a single courier.
    fn detail(&mut self, id: &str) -> Result<Courier>;

    /// Creates a courier.
    fn create(&mut self, input: &CreateCourierInput) -> Result<Courier>;

    /// Removes a courier with no assigned orders.
    fn remove(&mut self, id: &str) -> Result<()>;

    /// Assigns an order to a courier.
    fn assign_order(&mut self, id: &str, order_id: &str) -> Result<Courier>;

    /// Releases an order from a courier.
    fn unassign_order(&mut self, id: &str, order_id: &str) -> Result<Courier>;
}

/// Order-side operations exposed by a dispatch backend.
pub trait OrdersApi {
    /// Lists orders matching `filters`.
    fn list_orders(&mut self, filters: &OrdersListFilters) -> Result<Paginated<Order>>;

    /// Loads a single order.
    fn order_detail(&mut self, id: &str) -> Result<Order>;

    /// Assigns (or reassigns) the order to a courier.
    fn assign_courier(&mut self, order_id: &str, courier_id: &str) -> Result<Order>;
}

/// Backend that operates directly on an owned [`Roster`] and [`OrderBook`].
#[derive(Debug, Default)]
pub struct InProcessApi {
    roster: Roster,
    orders: OrderBook,
    create_options: CreateOptions,
}

impl InProcessApi {
    /// Creates an adapter over `roster`.
    #[must_use]
    pub fn new(roster: Roster, create_options: CreateOptions) -> Self {
        Self {
            roster,
            orders: OrderBook::new(),
            create_options,
        }
    }

    /// Replaces the order book.
    #[must_use]
    pub fn with_orders(mut self, orders: OrderBook) -> Self {
        self.orders = orders;
        self
    }

    /// Creates an adapter over the demo roster and orders with default create options.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(Roster::demo(), CreateOptions::default()).with_orders(OrderBook::demo())
    }

    /// Returns the underlying roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the underlying order book.
    #[must_use]
    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }
}

impl CouriersApi for InProcessApi {
    fn list(&mut self, filters: &CouriersListFilters) -> Result<Paginated<Courier>> {
        let filters = normalize_filters(filters)?;
        list_couriers(&self.roster, &filters)
    }

    fn detail(&mut self, id: &str) -> Result<Courier> {
        let id = parse_courier_id(id)?;
        get_courier(&self.roster, &id)
    }

    fn create(&mut self, input: &CreateCourierInput) -> Result<Courier> {
        let input = validate_create_input(input)?;
        create_courier(&mut self.roster, input, &mut self.create_options)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let id = parse_courier_id(id)?;
        remove_courier(&mut self.roster, &id)
    }

    fn assign_order(&mut self, id: &str, order_id: &str) -> Result<Courier> {
        let id = parse_courier_id(id)?;
        let order_id = parse_order_id(order_id)?;
        link_order(&mut self.roster, &mut self.orders, &id, order_id)
    }

    fn unassign_order(&mut self, id: &str, order_id: &str) -> Result<Courier> {
        let id = parse_courier_id(id)?;
        let order_id = parse_order_id(order_id)?;
        unlink_order(&mut self.roster, &mut self.orders, &id, &order_id)
    }
}

impl OrdersApi for InProcessApi {
    fn list_orders(&mut self, filters: &OrdersListFilters) -> Result<Paginated<Order>> {
        let filters = normalize_order_filters(filters)?;
        Ok(list_orders(&self.orders, &filters))
    }

    fn order_detail(&mut self, id: &str) -> Result<Order> {
        let id = parse_order_id(id)?;
        get_order(&self.orders, &id)
    }

    fn assign_courier(&mut self, order_id: &str, courier_id: &str) -> Result<Order> {
        let order_id = parse_order_id(order_id)?;
        let courier_id = parse_courier_id(courier_id)?;
        assign_courier(&mut self.roster, &mut self.orders, &order_id, &courier_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::ErrorCode;

    #[test]
    fn test_in_process_rejects_invalid_ids_before_lookup() {
        let mut api = InProcessApi::demo();
        assert_eq!(api.detail("c 1").unwrap_err().code(), ErrorCode::CourierIdInvalid);
        assert_eq!(
            api.assign_order("c-1", "").unwrap_err().code(),
            ErrorCode::OrderIdInvalid
        );
    }

    #[test]
    fn test_in_process_normalizes_filters() {
        let mut api = InProcessApi::demo();
        let filters = CouriersListFilters {
            region: "  north ".to_string(),
            ..CouriersListFilters::default()
        };
        let page = api.list(&filters).unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].name, "Alex Morgan");

        let out_of_range = CouriersListFilters {
            page_size: 101,
            ..CouriersListFilters::default()
        };
        assert_eq!(
            api.list(&out_of_range).unwrap_err().code(),
            ErrorCode::QueryPaginationOutOfRange
        );
    }

    #[test]
    fn test_in_process_orders() {
        let mut api = InProcessApi::demo();
        let page = api.list_orders(&OrdersListFilters::default()).unwrap();
        assert_eq!(page.total_items, 4);

        assert_eq!(api.order_detail("o 1").unwrap_err().code(), ErrorCode::OrderIdInvalid);
        assert_eq!(api.order_detail("o-9").unwrap_err().code(), ErrorCode::OrderNotFound);

        let order = api.assign_courier(" o-2 ", "c-3").unwrap();
        assert_eq!(order.courier_id.unwrap().as_str(), "c-3");
        assert_eq!(api.detail("c-3").unwrap().assigned_order_count, 1);
        assert_eq!(
            api.assign_courier("o-2", "c 3").unwrap_err().code(),
            ErrorCode::CourierIdInvalid
        );
    }

    #[test]
    fn test_courier_side_assignment_updates_tracked_order() {
        let mut api = InProcessApi::demo();
        api.assign_order("c-1", "o-3").unwrap();
        let order = api.order_detail("o-3").unwrap();
        assert_eq!(order.status, dispatch_core::OrderStatus::Assigned);

        api.unassign_order("c-2", "o-1").unwrap();
        let order = api.order_detail("o-1").unwrap();
        assert_eq!(order.status, dispatch_core::OrderStatus::Created);
        assert!(order.courier_id.is_none());
        assert_eq!(api.orders().len(), 4);
    }

    #[test]
    fn test_in_process_create_trims_input() {
        let mut api = InProcessApi::demo();
        let input = CreateCourierInput {
            name: "  Riley Park ".to_string(),
            phone: "555-0199".to_string(),
            vehicle: "scooter".to_string(),
            region: "west".to_string(),
        };
        let courier = api.create(&input).unwrap();
        assert_eq!(courier.name, "Riley Park");
        assert_eq!(api.detail(courier.id.as_str()).unwrap(), courier);
        assert_eq!(api.roster().len(), 4);
    }
}
