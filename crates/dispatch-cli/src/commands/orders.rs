// Rust guideline compliant 2026-10-18

//! Implementation of the `dispatch orders` subcommands.

use crate::OutputFormatter;
use anyhow::Result;
use dispatch_app::OrdersApi;
use dispatch_core::{OrderSort, OrderStatus, OrdersListFilters};

/// Arguments accepted by `dispatch orders list`.
#[derive(Debug, Clone)]
pub struct OrdersListArgs {
    /// One-based page number.
    pub page: u32,
    /// Orders per page.
    pub page_size: u32,
    /// Case-insensitive match against tracking id or customer name.
    pub q: Option<String>,
    /// Status filter; `all` keeps every status.
    pub status: String,
    /// Sort order (`eta` or `createdAt`).
    pub sort: String,
}

impl Default for OrdersListArgs {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            q: None,
            status: "all".to_string(),
            sort: OrderSort::default().to_string(),
        }
    }
}

impl OrdersListArgs {
    /// Converts the arguments into list filters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStatusFilter` or `Error::InvalidSort` for
    /// unknown values.
    pub fn to_filters(&self) -> Result<OrdersListFilters> {
        let status = match self.status.as_str() {
            "" | "all" => None,
            other => Some(other.parse::<OrderStatus>()?),
        };
        Ok(OrdersListFilters {
            page: self.page,
            page_size: self.page_size,
            q: self.q.clone().unwrap_or_default(),
            status,
            sort: self.sort.parse::<OrderSort>()?,
        })
    }
}

/// Lists orders.
///
/// # Errors
///
/// Returns an error if the filters are invalid or the backend rejects the request.
pub fn list(
    api: &mut dyn OrdersApi,
    args: &OrdersListArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let filters = args.to_filters()?;
    let page = api.list_orders(&filters)?;
    println!("{}", formatter.format_order_page(&page));
    Ok(())
}

/// Shows a single order with its timeline.
///
/// # Errors
///
/// Returns an error if the id is invalid or the order does not exist.
pub fn show(api: &mut dyn OrdersApi, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let order = api.order_detail(id)?;
    println!("{}", formatter.format_order(&order));
    Ok(())
}

/// Assigns a courier to an order and prints the updated order.
///
/// # Errors
///
/// Returns an error if either id is invalid, either record is missing, or the
/// order is closed.
pub fn assign(
    api: &mut dyn OrdersApi,
    order_id: &str,
    courier_id: &str,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let order = api.assign_courier(order_id, courier_id)?;
    println!("{}", formatter.format_order(&order));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::Error;

    #[test]
    fn test_default_args_list_everything() {
        let filters = OrdersListArgs::default().to_filters().unwrap();
        assert_eq!(filters, OrdersListFilters::default());
    }

    #[test]
    fn test_status_and_sort_parse() {
        let args = OrdersListArgs {
            status: "picked_up".to_string(),
            sort: "createdAt".to_string(),
            q: Some("trk".to_string()),
            ..OrdersListArgs::default()
        };
        let filters = args.to_filters().unwrap();
        assert_eq!(filters.status, Some(OrderStatus::PickedUp));
        assert_eq!(filters.sort, OrderSort::CreatedAt);
        assert_eq!(filters.q, "trk");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let args = OrdersListArgs {
            status: "lost".to_string(),
            ..OrdersListArgs::default()
        };
        let err = args.to_filters().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidStatusFilter(_))
        ));
    }
}
