// Rust guideline compliant 2026-10-18

//! Implementation of the `dispatch delete` command.

use crate::OutputFormatter;
use anyhow::Result;
use dispatch_app::CouriersApi;

/// Removes a courier that holds no orders.
///
/// # Errors
///
/// Returns an error if the courier does not exist or still has assigned orders.
pub fn execute(api: &mut dyn CouriersApi, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    api.remove(id)?;
    println!("{}", formatter.format_removed(id.trim()));
    Ok(())
}
