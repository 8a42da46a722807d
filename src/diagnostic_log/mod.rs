//! Diagnostic Log - the query/control facade
//!
//! One `DiagnosticLog` is created at startup and shared (usually as an
//! `Arc`) with every call site that records events and with the single
//! rendering surface that reads them. All state sits behind one lock, so
//! each operation sees and leaves a consistent snapshot of both the
//! routine buffer and the sticky errors.

mod control;
mod ingest;
mod query;

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use crate::clock::{Clock, SystemClock};
use crate::config::LogConfig;
use crate::event_store::{
    EventStore, RetentionSweeper, SuppressionStats, Sweep, SweepReport, SweeperHandle,
};
use crate::throttle::{Deduplicator, RateLimiter};
use crate::types::{Category, Counts, Detail, Event};

/// Mutable state guarded by the facade lock
pub(crate) struct LogState {
    pub(crate) store: EventStore,
    pub(crate) limiter: RateLimiter,
    pub(crate) dedup: Deduplicator,
    pub(crate) stats: SuppressionStats,
    pub(crate) paused: bool,
    pub(crate) visible: bool,
    pub(crate) next_id: u64,
    pub(crate) last_timestamp: i64,
}

impl LogState {
    fn new(config: &LogConfig) -> Self {
        Self {
            store: EventStore::with_config(config),
            limiter: RateLimiter::new(config.rate_limit_window_ms, config.rate_limit_max_per_window),
            dedup: Deduplicator::new(config.dedup_window_ms),
            stats: SuppressionStats::default(),
            paused: false,
            visible: true,
            next_id: 1,
            last_timestamp: i64::MIN,
        }
    }
}

/// Process-wide diagnostic event log
pub struct DiagnosticLog {
    pub(crate) config: LogConfig,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) state: Mutex<LogState>,
}

impl DiagnosticLog {
    /// Create a log with default configuration and the system clock
    pub fn new() -> Self {
        Self::with_config(LogConfig::default())
    }

    /// Create a log with custom configuration
    ///
    /// Out-of-range values are clamped instead of rejected.
    pub fn with_config(config: LogConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a log reading time from `clock`
    pub fn with_clock(config: LogConfig, clock: Arc<dyn Clock>) -> Self {
        let config = config.clamped();
        let state = LogState::new(&config);
        Self {
            config,
            clock,
            state: Mutex::new(state),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Spawn the retention sweeper for this log
    ///
    /// Must be called inside a tokio runtime. Keep the handle alive for as
    /// long as sweeping should continue.
    pub fn start_sweeper(self: &Arc<Self>) -> SweeperHandle {
        RetentionSweeper::spawn(Arc::clone(self), self.config.sweep_interval())
    }

    // ------------------------------------------------------------------
    // Ingress
    // ------------------------------------------------------------------

    /// Record an event; never fails and never panics on bad input
    pub fn record(&self, category: Category, message: impl Into<String>, detail: Option<Detail>) {
        ingest::record(self, category, message.into(), detail)
    }

    /// Record with a free-text detail block
    pub fn record_text(&self, category: Category, message: impl Into<String>, text: impl Into<String>) {
        self.record(category, message, Some(Detail::Text(text.into())))
    }

    /// Record with a structured detail; non-object values are wrapped
    pub fn record_structured(&self, category: Category, message: impl Into<String>, value: Value) {
        self.record(category, message, Some(Detail::from_value(value)))
    }

    /// Record with a key/value map
    pub fn record_map(&self, category: Category, message: impl Into<String>, map: Map<String, Value>) {
        self.record(category, message, Some(Detail::Structured(map)))
    }

    pub fn info(&self, message: impl Into<String>) {
        self.record(Category::Info, message, None)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.record(Category::Success, message, None)
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.record(Category::Warning, message, None)
    }

    pub fn error(&self, message: impl Into<String>) {
        self.record(Category::Error, message, None)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All stored events, optionally of one category, timestamp ascending
    pub fn all_events(&self, filter: Option<Category>) -> Vec<Event> {
        query::all_events(self, filter)
    }

    /// Per-category counts of what is currently stored
    pub fn counts(&self) -> Counts {
        query::counts(self)
    }

    /// Suppression statistics since the last `clear_all`
    pub fn stats(&self) -> SuppressionStats {
        query::stats(self)
    }

    /// Text rendering of `all_events(filter)` for the clipboard
    pub fn export(&self, filter: Option<Category>) -> String {
        crate::export::export_text(&self.all_events(filter))
    }

    pub fn len(&self) -> usize {
        self.state.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().store.is_empty()
    }

    pub fn routine_len(&self) -> usize {
        self.state.lock().store.routine_len()
    }

    pub fn sticky_len(&self) -> usize {
        self.state.lock().store.sticky_len()
    }

    // ------------------------------------------------------------------
    // Control
    // ------------------------------------------------------------------

    /// Empty both collections and all limiter/dedup state
    pub fn clear_all(&self) {
        control::clear_all(self)
    }

    /// Empty the sticky error collection only
    pub fn clear_sticky_errors(&self) {
        control::clear_sticky_errors(self)
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_pause(&self) -> bool {
        control::toggle_pause(self)
    }

    pub fn is_paused(&self) -> bool {
        self.state.lock().paused
    }

    /// Flip the display flag, returning the new value
    pub fn toggle_visibility(&self) -> bool {
        control::toggle_visibility(self)
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    /// Run one retention pass now
    ///
    /// Skipped (returns `None`) while paused; stale dedup entries are
    /// pruned either way.
    pub fn sweep_now(&self) -> Option<SweepReport> {
        control::sweep(self)
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Sweep for DiagnosticLog {
    fn sweep(&self) -> Option<SweepReport> {
        self.sweep_now()
    }
}
