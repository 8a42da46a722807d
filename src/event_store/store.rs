//! Event Store - bounded in-memory storage
//!
//! Two collections with independent bounds:
//! - the routine buffer holds info, success and warning events
//! - the sticky collection holds errors only, so routine churn never
//!   evicts them
//!
//! Both evict oldest-first when full.

use std::collections::VecDeque;

use crate::config::LogConfig;
use crate::types::{Category, Event};

/// Outcome of a single insert
#[derive(Debug, Clone, PartialEq)]
pub enum Insertion {
    /// Stored without evicting anything
    Stored,
    /// Stored, and the oldest routine event was evicted
    EvictedRoutine(Event),
    /// Stored, and the oldest sticky error was evicted
    EvictedSticky(Event),
}

/// Result of a retention sweep over the routine buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Removed because older than the TTL
    pub expired: usize,
    /// Removed to get down to the soft cap
    pub trimmed: usize,
}

impl SweepReport {
    pub fn removed(&self) -> usize {
        self.expired + self.trimmed
    }
}

/// Bounded routine buffer plus sticky error collection
#[derive(Debug, Clone)]
pub struct EventStore {
    routine: VecDeque<Event>,
    sticky: VecDeque<Event>,
    routine_capacity: usize,
    sticky_capacity: usize,
}

impl EventStore {
    /// Create a store with explicit bounds (each at least 1)
    pub fn new(routine_capacity: usize, sticky_capacity: usize) -> Self {
        let routine_capacity = routine_capacity.max(1);
        let sticky_capacity = sticky_capacity.max(1);
        Self {
            routine: VecDeque::with_capacity(routine_capacity + 1),
            sticky: VecDeque::with_capacity(sticky_capacity + 1),
            routine_capacity,
            sticky_capacity,
        }
    }

    /// Create a store from the log configuration
    pub fn with_config(config: &LogConfig) -> Self {
        Self::new(config.routine_capacity, config.sticky_capacity)
    }

    pub fn routine_capacity(&self) -> usize {
        self.routine_capacity
    }

    pub fn sticky_capacity(&self) -> usize {
        self.sticky_capacity
    }

    /// Insert an event into the collection its category belongs to
    pub fn insert(&mut self, event: Event) -> Insertion {
        if event.category.is_sticky() {
            self.sticky.push_back(event);
            if self.sticky.len() > self.sticky_capacity {
                if let Some(evicted) = self.sticky.pop_front() {
                    return Insertion::EvictedSticky(evicted);
                }
            }
        } else {
            self.routine.push_back(event);
            if self.routine.len() > self.routine_capacity {
                if let Some(evicted) = self.routine.pop_front() {
                    return Insertion::EvictedRoutine(evicted);
                }
            }
        }
        Insertion::Stored
    }

    /// Merge both collections, ordered by timestamp ascending
    ///
    /// Recomputed on every call.
    pub fn all_events(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .routine
            .iter()
            .chain(self.sticky.iter())
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.timestamp, e.id));
        events
    }

    /// Merged events of a single category
    pub fn events_in(&self, category: Category) -> Vec<Event> {
        let source = if category.is_sticky() {
            &self.sticky
        } else {
            &self.routine
        };
        // Each collection is already in insertion (= timestamp) order
        source
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Routine buffer contents, oldest first
    pub fn routine(&self) -> impl Iterator<Item = &Event> {
        self.routine.iter()
    }

    /// Sticky errors, oldest first
    pub fn sticky(&self) -> impl Iterator<Item = &Event> {
        self.sticky.iter()
    }

    /// Age out stale routine events, then trim down to `soft_cap`
    ///
    /// Warnings are exempt from the age pass but not from the trim.
    /// The sticky collection is never touched.
    pub fn sweep(&mut self, now_ms: i64, ttl_ms: i64, soft_cap: usize) -> SweepReport {
        let before = self.routine.len();
        self.routine
            .retain(|e| e.category.is_age_exempt() || e.age_ms(now_ms) <= ttl_ms);
        let expired = before - self.routine.len();

        let mut trimmed = 0;
        while self.routine.len() > soft_cap {
            self.routine.pop_front();
            trimmed += 1;
        }

        SweepReport { expired, trimmed }
    }

    /// Empty both collections
    pub fn clear(&mut self) {
        self.routine.clear();
        self.sticky.clear();
    }

    /// Empty the sticky collection only
    pub fn clear_sticky(&mut self) -> usize {
        let removed = self.sticky.len();
        self.sticky.clear();
        removed
    }

    pub fn routine_len(&self) -> usize {
        self.routine.len()
    }

    pub fn sticky_len(&self) -> usize {
        self.sticky.len()
    }

    pub fn len(&self) -> usize {
        self.routine.len() + self.sticky.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routine.is_empty() && self.sticky.is_empty()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::with_config(&LogConfig::default())
    }
}
