//! Duplicate suppression for identical (category, message) pairs

use std::collections::HashMap;

use crate::types::Category;

/// Remembers when each (category, message) pair was last accepted
#[derive(Debug, Clone)]
pub struct Deduplicator {
    window_ms: i64,
    last_seen: HashMap<(Category, String), i64>,
}

impl Deduplicator {
    pub fn new(window_ms: i64) -> Self {
        Self {
            window_ms,
            last_seen: HashMap::new(),
        }
    }

    /// True if the same pair was recorded less than one window ago
    ///
    /// Errors are never duplicates.
    pub fn is_duplicate(&self, category: Category, message: &str, now_ms: i64) -> bool {
        if category.bypasses_dedup() {
            return false;
        }

        match self.last_seen.get(&(category, message.to_string())) {
            Some(&seen) => now_ms.saturating_sub(seen) < self.window_ms,
            None => false,
        }
    }

    /// Update the last-seen time for a pair
    pub fn record(&mut self, category: Category, message: &str, now_ms: i64) {
        if category.bypasses_dedup() {
            return;
        }
        self.last_seen
            .insert((category, message.to_string()), now_ms);
    }

    /// Drop entries last seen more than `max_age_ms` ago, returning how many
    pub fn prune(&mut self, now_ms: i64, max_age_ms: i64) -> usize {
        let before = self.last_seen.len();
        self.last_seen
            .retain(|_, seen| now_ms.saturating_sub(*seen) <= max_age_ms);
        before - self.last_seen.len()
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }

    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }
}
