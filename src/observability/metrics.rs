//! Registry operation counters.
//!
//! Each registry owns a [`RegistryMetrics`]; clones share the same counters,
//! so a handle can be passed around while the registry keeps recording.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for the operations applied to one registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryMetrics {
    added_total: Arc<AtomicU64>,
    removed_total: Arc<AtomicU64>,
    updated_total: Arc<AtomicU64>,
    rejected_total: Arc<AtomicU64>,
}

impl RegistryMetrics {
    /// Create a new set of zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_added(&self) {
        self.added_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn track_removed(&self) {
        self.removed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn track_updated(&self) {
        self.updated_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Count an operation that failed validation or a registry precondition.
    pub fn track_rejected(&self) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn added_total(&self) -> u64 {
        self.added_total.load(Ordering::Relaxed)
    }

    pub fn removed_total(&self) -> u64 {
        self.removed_total.load(Ordering::Relaxed)
    }

    pub fn updated_total(&self) -> u64 {
        self.updated_total.load(Ordering::Relaxed)
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total.load(Ordering::Relaxed)
    }

    /// Get the share of operations that were rejected (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.rejected_total() as f64;
        let total = (self.added_total()
            + self.removed_total()
            + self.updated_total()
            + self.rejected_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Registry Metrics:\n\
             Added: {}\n\
             Removed: {}\n\
             Updated: {}\n\
             Rejected: {} ({:.2}% rejection rate)",
            self.added_total(),
            self.removed_total(),
            self.updated_total(),
            self.rejected_total(),
            self.rejection_rate() * 100.0,
        )
    }
}
