//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::diagnostic_log::DiagnosticLog;

/// State handed to every handler
pub struct AppState {
    /// The one log instance for this process
    pub log: Arc<DiagnosticLog>,
}

impl AppState {
    pub fn new(log: Arc<DiagnosticLog>) -> Self {
        Self { log }
    }
}
