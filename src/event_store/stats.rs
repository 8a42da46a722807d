//! Suppression statistics
//!
//! Counts every event the log chose not to keep, by reason. Counters only
//! grow until the next `clear_all`.

use serde::Serialize;

/// What happened to events that did not make it (or stay) in the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SuppressionStats {
    /// Dropped by the per-category rate limiter
    pub rate_limited: u64,
    /// Dropped as a duplicate (category, message) pair
    pub deduplicated: u64,
    /// Dropped because the log was paused
    pub paused_dropped: u64,
    /// Routine events evicted by the capacity bound
    pub routine_evicted: u64,
    /// Sticky errors evicted by the capacity bound
    pub sticky_evicted: u64,
    /// Routine events removed by the retention sweeper
    pub swept: u64,
    /// Events accepted into the store
    pub accepted: u64,
}

impl SuppressionStats {
    /// Events dropped before reaching the store
    pub fn dropped_at_write(&self) -> u64 {
        self.rate_limited + self.deduplicated + self.paused_dropped
    }

    /// Events removed after having been stored
    pub fn removed_after_write(&self) -> u64 {
        self.routine_evicted + self.sticky_evicted + self.swept
    }

    /// Fraction of write attempts that were dropped at write time
    pub fn suppression_rate(&self) -> f64 {
        let attempts = self.accepted + self.dropped_at_write();
        if attempts == 0 {
            0.0
        } else {
            self.dropped_at_write() as f64 / attempts as f64
        }
    }
}
