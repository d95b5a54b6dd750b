// Rust guideline compliant 2026-10-18

//! Order listing and courier assignment.
//!
//! Assignment touches two records: the order (status, courier, timeline) and the
//! courier's assigned order list on the roster. Every check runs before either
//! side is mutated.

use crate::mutation::{assign_order, unassign_order};
use chrono::Utc;
use dispatch_core::{
    Courier, CourierId, Error, Order, OrderBook, OrderId, OrderSort, OrderStatus,
    OrdersListFilters, Paginated, Result, Roster,
};
use tracing::info;

/// Lists orders matching `filters`.
///
/// `q` matches tracking id or customer name, case-insensitively. `eta` sorts
/// soonest first and `createdAt` newest first; ties keep book order.
pub fn list_orders(book: &OrderBook, filters: &OrdersListFilters) -> Paginated<Order> {
    let q = filters.q.to_lowercase();
    let mut matched: Vec<&Order> = book
        .orders()
        .iter()
        .filter(|order| filters.status.map_or(true, |status| order.status == status))
        .filter(|order| {
            q.is_empty()
                || order.tracking_id.to_lowercase().contains(&q)
                || order.customer_name.to_lowercase().contains(&q)
        })
        .collect();

    match filters.sort {
        OrderSort::Eta => matched.sort_by(|left, right| left.eta.cmp(&right.eta)),
        OrderSort::CreatedAt => {
            matched.sort_by(|left, right| right.created_at.cmp(&left.created_at))
        }
    }

    let page_size = filters.page_size as usize;
    let start_index = (filters.page as usize).saturating_sub(1) * page_size;
    let items = matched
        .iter()
        .skip(start_index)
        .take(page_size)
        .map(|order| (*order).clone())
        .collect();

    Paginated {
        items,
        page: filters.page,
        page_size: filters.page_size,
        total_items: matched.len(),
        total_pages: Paginated::<Order>::page_count(matched.len(), filters.page_size),
    }
}

/// Loads a single order.
///
/// # Errors
///
/// Returns `Error::OrderNotFound` if absent.
pub fn get_order(book: &OrderBook, id: &OrderId) -> Result<Order> {
    book.get(id).cloned()
}

/// Assigns an order to a courier from the order side.
///
/// If another courier holds the order it is moved, and both couriers' lists
/// stay consistent with the order record.
///
/// # Errors
///
/// - `Error::OrderNotFound` if the order is not in the book
/// - `Error::OrderNotAssignable` if the order is picked up, delivered or cancelled
/// - `Error::CourierNotFound` or `Error::DataIntegrity` for either courier
/// - `Error::OrderAlreadyAssigned` if the target courier already holds the order
pub fn assign_courier(
    roster: &mut Roster,
    book: &mut OrderBook,
    order_id: &OrderId,
    courier_id: &CourierId,
) -> Result<Order> {
    ensure_assignable(book.get(order_id)?)?;
    roster.get(courier_id)?;

    let previous = roster.holder_of(order_id).map(|holder| holder.id.clone());
    let note = match &previous {
        Some(holder) if holder == courier_id => {
            return Err(Error::OrderAlreadyAssigned {
                order_id: order_id.to_string(),
                courier_id: holder.to_string(),
            });
        }
        Some(holder) => {
            roster.get(holder)?;
            unassign_order(roster, holder, order_id)?;
            format!("Reassigned from courier {} to {}", holder, courier_id)
        }
        None => format!("Assigned to courier {}", courier_id),
    };
    assign_order(roster, courier_id, order_id.clone())?;

    let order = book.get_mut(order_id)?;
    order.courier_id = Some(courier_id.clone());
    order.record(OrderStatus::Assigned, note, Utc::now());
    info!(order_id = %order_id, courier_id = %courier_id, "courier assigned to order");
    Ok(order.clone())
}

/// Assigns an order from the courier side, updating the order if it is tracked.
///
/// Order ids that are not in the book are assigned as plain references.
///
/// # Errors
///
/// - `Error::OrderNotAssignable` if a tracked order cannot be assigned
/// - any error from [`assign_order`]
pub fn link_order(
    roster: &mut Roster,
    book: &mut OrderBook,
    courier_id: &CourierId,
    order_id: OrderId,
) -> Result<Courier> {
    if let Some(order) = book.find(&order_id) {
        ensure_assignable(order)?;
    }

    let courier = assign_order(roster, courier_id, order_id.clone())?;
    if let Ok(order) = book.get_mut(&order_id) {
        order.courier_id = Some(courier_id.clone());
        order.record(
            OrderStatus::Assigned,
            format!("Assigned to courier {}", courier_id),
            Utc::now(),
        );
    }
    Ok(courier)
}

/// Releases an order from the courier side.
///
/// A tracked order in `assigned` status goes back to `created` without a
/// courier; later statuses only lose the courier link.
///
/// # Errors
///
/// Any error from [`unassign_order`].
pub fn unlink_order(
    roster: &mut Roster,
    book: &mut OrderBook,
    courier_id: &CourierId,
    order_id: &OrderId,
) -> Result<Courier> {
    let courier = unassign_order(roster, courier_id, order_id)?;
    if let Ok(order) = book.get_mut(order_id) {
        order.courier_id = None;
        if order.status == OrderStatus::Assigned {
            order.record(
                OrderStatus::Created,
                format!("Unassigned from courier {}", courier_id),
                Utc::now(),
            );
        }
    }
    Ok(courier)
}

fn ensure_assignable(order: &Order) -> Result<()> {
    if !order.status.is_assignable() {
        return Err(Error::OrderNotAssignable {
            order_id: order.id.to_string(),
            status: order.status.to_string(),
        });
    }
    Ok(())
}
