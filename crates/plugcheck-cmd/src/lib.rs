//! Command implementations for the plugcheck CLI.
//!
//! Each module corresponds to a `plugcheck` top-level command.

pub mod check;
pub mod config;
pub mod factory;
pub mod version;

#[cfg(test)]
pub mod test_helpers;
