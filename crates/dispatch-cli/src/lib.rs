// Rust guideline compliant 2026-10-18

//! Dispatch CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod client;
pub mod commands;
pub mod output;
pub mod terminal;

pub use client::HttpApi;
pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;
