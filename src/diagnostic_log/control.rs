//! Control operations: clearing, pausing, visibility, sweeping

use crate::event_store::{SuppressionStats, SweepReport};

use super::DiagnosticLog;

/// Empty both collections and reset limiter, dedup and stats
///
/// Ids keep counting so a cleared-then-refilled list never reuses one.
pub fn clear_all(log: &DiagnosticLog) {
    let mut state = log.state.lock();
    let removed = state.store.len();
    state.store.clear();
    state.limiter.clear();
    state.dedup.clear();
    state.stats = SuppressionStats::default();
    drop(state);

    tracing::info!(removed, "diagnostic log cleared");
}

pub fn clear_sticky_errors(log: &DiagnosticLog) {
    let removed = log.state.lock().store.clear_sticky();
    tracing::info!(removed, "sticky errors cleared");
}

pub fn toggle_pause(log: &DiagnosticLog) -> bool {
    let mut state = log.state.lock();
    state.paused = !state.paused;
    let paused = state.paused;
    drop(state);

    tracing::info!(paused, "diagnostic log pause toggled");
    paused
}

pub fn toggle_visibility(log: &DiagnosticLog) -> bool {
    let mut state = log.state.lock();
    state.visible = !state.visible;
    let visible = state.visible;
    drop(state);

    tracing::debug!(visible, "diagnostic log visibility toggled");
    visible
}

/// One retention pass; the routine sweep is skipped while paused
pub fn sweep(log: &DiagnosticLog) -> Option<SweepReport> {
    let now = log.clock.now_ms();
    let mut state = log.state.lock();

    let pruned = state.dedup.prune(now, log.config.dedup_retention_ms());
    if pruned > 0 {
        tracing::debug!(pruned, "stale dedup entries pruned");
    }

    if state.paused {
        return None;
    }

    let report = state
        .store
        .sweep(now, log.config.retention_ttl_ms, log.config.soft_cap);
    state.stats.swept += report.removed() as u64;
    Some(report)
}
