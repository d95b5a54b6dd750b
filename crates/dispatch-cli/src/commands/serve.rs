// Rust guideline compliant 2026-10-18

//! Implementation of the `dispatch serve` command.

use anyhow::Result;
use dispatch_server::ServerOptions;

/// Runs the HTTP server in the foreground.
///
/// # Errors
///
/// Returns an error if the server cannot start or stops with a failure.
pub fn execute(options: ServerOptions) -> Result<()> {
    dispatch_server::run(options)?;
    Ok(())
}
