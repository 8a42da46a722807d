//! Plain-text export for copy-to-clipboard
//!
//! Each event renders as
//!
//! ```text
//! [HH:MM:SS.mmm] CATEGORY: message
//!   Details:
//!     <pretty JSON or verbatim text, indented>
//! ```
//!
//! with a blank line between events. Pure formatting, no side effects.

use serde_json::{Map, Value};

use crate::types::{Detail, Event};
use crate::utils::format_time_of_day;

/// Substituted when a structured detail cannot be rendered
pub const UNRENDERABLE_DETAIL: &str = "[unrenderable detail]";

const DETAIL_INDENT: &str = "    ";

/// Render events as clipboard text
pub fn export_text(events: &[Event]) -> String {
    events
        .iter()
        .map(format_event)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a single event (header line plus optional detail block)
pub fn format_event(event: &Event) -> String {
    let mut out = format!(
        "[{}] {}: {}",
        format_time_of_day(event.timestamp),
        event.category.label(),
        event.message
    );

    if let Some(detail) = &event.detail {
        out.push_str("\n  Details:");
        for line in render_detail(detail).lines() {
            out.push('\n');
            out.push_str(DETAIL_INDENT);
            out.push_str(line);
        }
    }

    out
}

/// Detail body: pretty JSON for structured, verbatim for text
pub fn render_detail(detail: &Detail) -> String {
    match detail {
        Detail::Text(text) => text.clone(),
        Detail::Structured(map) => render_map(map),
    }
}

fn render_map(map: &Map<String, Value>) -> String {
    match serde_json::to_string_pretty(map) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "failed to render event detail");
            UNRENDERABLE_DETAIL.to_string()
        }
    }
}
