//! HTTP probes and plugin support detection for plugcheck.

pub mod checker;
pub mod errors;
pub mod http;
pub mod probe;
pub mod reachability;
pub mod support;
