//! Read operations for the rendering surface

use crate::event_store::SuppressionStats;
use crate::types::{Category, Counts, Event};

use super::DiagnosticLog;

/// Merged, timestamp-ordered snapshot of the stored events
pub fn all_events(log: &DiagnosticLog, filter: Option<Category>) -> Vec<Event> {
    let state = log.state.lock();
    match filter {
        Some(category) => state.store.events_in(category),
        None => state.store.all_events(),
    }
}

/// Counts recomputed from the current collections
pub fn counts(log: &DiagnosticLog) -> Counts {
    let state = log.state.lock();
    Counts::from_events(state.store.routine().chain(state.store.sticky()))
}

pub fn stats(log: &DiagnosticLog) -> SuppressionStats {
    log.state.lock().stats
}
