//! Write path: rate limit, dedup, pause gate, store
//!
//! Every rejection is counted and logged at debug level; none is reported
//! to the caller.

use crate::event_store::Insertion;
use crate::types::{Category, Detail, Event, EventId};

use super::DiagnosticLog;

/// Target used when mirroring accepted events through `tracing`
pub const MIRROR_TARGET: &str = "diagnostic_log::events";

/// Run one `record()` call through the pipeline
pub fn record(log: &DiagnosticLog, category: Category, message: String, detail: Option<Detail>) {
    let now = log.clock.now_ms();

    let event = {
        let mut state = log.state.lock();

        if !state.limiter.allow(category, now) {
            state.stats.rate_limited += 1;
            tracing::debug!(%category, reason = "rate_limited", "event suppressed");
            return;
        }

        if state.dedup.is_duplicate(category, &message, now) {
            state.stats.deduplicated += 1;
            tracing::debug!(%category, reason = "duplicate", "event suppressed");
            return;
        }
        state.dedup.record(category, &message, now);
        if state.dedup.len() > log.config.dedup_max_keys {
            state.dedup.prune(now, log.config.dedup_retention_ms());
        }

        if state.paused && !category.bypasses_pause() {
            state.stats.paused_dropped += 1;
            tracing::debug!(%category, reason = "paused", "event suppressed");
            return;
        }

        // Strictly increasing even when the clock stalls or steps back
        let timestamp = now.max(state.last_timestamp.saturating_add(1));
        state.last_timestamp = timestamp;
        let id = EventId(state.next_id);
        state.next_id += 1;

        let event = Event::new(id, category, message, detail, timestamp);
        let mirrored = log.config.mirror_to_tracing.then(|| event.clone());

        match state.store.insert(event) {
            Insertion::Stored => {}
            Insertion::EvictedRoutine(evicted) => {
                state.stats.routine_evicted += 1;
                tracing::debug!(id = %evicted.id, "routine event evicted at capacity");
            }
            Insertion::EvictedSticky(evicted) => {
                state.stats.sticky_evicted += 1;
                tracing::debug!(id = %evicted.id, "sticky error evicted at capacity");
            }
        }
        state.stats.accepted += 1;

        mirrored
    };

    // Outside the lock: a subscriber that records back into the log must
    // not deadlock.
    if let Some(event) = event {
        mirror(&event);
    }
}

fn mirror(event: &Event) {
    match event.category {
        Category::Error => {
            tracing::error!(target: MIRROR_TARGET, id = %event.id, "{}", event.message)
        }
        Category::Warning => {
            tracing::warn!(target: MIRROR_TARGET, id = %event.id, "{}", event.message)
        }
        Category::Info | Category::Success => {
            tracing::info!(
                target: MIRROR_TARGET,
                id = %event.id,
                category = %event.category,
                "{}",
                event.message
            )
        }
    }
}
