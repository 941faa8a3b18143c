//! Core types, traits, and utilities for plugcheck.
//!
//! This crate provides the foundational abstractions used across all plugcheck crates:
//! - [`Config`](config::Config) trait for reading the configured backend server
//! - [`SupportedPlugin`] enumeration of optional server plugins
//! - [`IOStreams`] for capturable terminal output

pub mod cmdutil;
pub mod config;
pub mod errors;
pub mod iostreams;
pub mod plugin;
#[cfg(test)]
pub mod test_utils;

pub use errors::ConfigError;
pub use iostreams::IOStreams;
pub use plugin::SupportedPlugin;
