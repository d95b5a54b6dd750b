// Rust guideline compliant 2026-10-18

//! Implementation of the `dispatch assign` command.

use crate::OutputFormatter;
use anyhow::Result;
use dispatch_app::CouriersApi;

/// Assigns an order to a courier and prints the updated courier.
///
/// # Errors
///
/// Returns an error if either id is invalid, the courier does not exist, or
/// the order is already held by a courier.
pub fn execute(
    api: &mut dyn CouriersApi,
    id: &str,
    order_id: &str,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let courier = api.assign_order(id, order_id)?;
    println!("{}", formatter.format_courier(&courier));
    Ok(())
}
