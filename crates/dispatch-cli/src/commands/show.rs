// Rust guideline compliant 2026-10-18

//! Implementation of the `dispatch show` command.

use crate::OutputFormatter;
use anyhow::Result;
use dispatch_app::CouriersApi;

/// Shows a single courier.
///
/// # Errors
///
/// Returns an error if the id is invalid, the courier does not exist, or its
/// record fails the integrity check.
pub fn execute(api: &mut dyn CouriersApi, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let courier = api.detail(id)?;
    println!("{}", formatter.format_courier(&courier));
    Ok(())
}
