//! # abikit-observability
//!
//! Structured logging for ABIKit, built on `tracing`.
//! Log levels are configurable globally and per component, with either
//! human-readable or JSON output.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
