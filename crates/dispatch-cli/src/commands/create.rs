// Rust guideline compliant 2026-10-18

//! Implementation of the `dispatch create` command.

use crate::OutputFormatter;
use anyhow::Result;
use dispatch_app::CouriersApi;
use dispatch_core::CreateCourierInput;

/// Creates a courier with no assigned orders.
///
/// # Errors
///
/// Returns an error if a field is empty or too long, the roster is full, or
/// no free id could be generated.
pub fn execute(
    api: &mut dyn CouriersApi,
    input: CreateCourierInput,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let courier = api.create(&input)?;
    println!("{}", formatter.format_courier(&courier));
    Ok(())
}
