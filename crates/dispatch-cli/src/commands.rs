// Rust guideline compliant 2026-10-18

//! Command implementations for the Dispatch CLI.

pub mod assign;
pub mod create;
pub mod delete;
pub mod list;
pub mod orders;
pub mod serve;
pub mod show;
pub mod unassign;
