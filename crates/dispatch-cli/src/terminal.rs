// Rust guideline compliant 2026-10-18

//! Terminal capability detection.

use std::env;
use std::io::IsTerminal;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    std::io::stderr().is_terminal() && std::io::stdout().is_terminal()
}
