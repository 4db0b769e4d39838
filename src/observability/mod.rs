//! Observability module for logging and metrics.
//!
//! This module provides the log subscriber setup and the per-registry
//! operation counters.

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::RegistryMetrics;
