//! Event types for the diagnostic log
//!
//! An [`Event`] is the immutable record produced by a single `record()` call.
//! Its [`Category`] doubles as severity and decides which suppression rules
//! apply on the way into the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category of a diagnostic event (closed set, also used as severity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Transient, low priority progress message
    Info,
    /// Transient confirmation
    Success,
    /// Retained longer and visually flagged
    Warning,
    /// Sticky, never suppressed
    Error,
}

impl Category {
    /// All categories in severity order
    pub const ALL: [Category; 4] = [
        Category::Info,
        Category::Success,
        Category::Warning,
        Category::Error,
    ];

    /// Lower-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Error => "error",
        }
    }

    /// Upper-case label used by the text export
    pub fn label(&self) -> &'static str {
        match self {
            Category::Info => "INFO",
            Category::Success => "SUCCESS",
            Category::Warning => "WARNING",
            Category::Error => "ERROR",
        }
    }

    /// Glyph for the rendering surface
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Info => "💬",
            Category::Success => "✅",
            Category::Warning => "⚠️",
            Category::Error => "❌",
        }
    }

    /// Stored in the sticky collection instead of the routine buffer
    pub fn is_sticky(&self) -> bool {
        matches!(self, Category::Error)
    }

    /// Skips the per-category rate limiter
    pub fn bypasses_rate_limit(&self) -> bool {
        matches!(self, Category::Warning | Category::Error)
    }

    /// Skips duplicate suppression
    pub fn bypasses_dedup(&self) -> bool {
        matches!(self, Category::Error)
    }

    /// Accepted while the log is paused
    pub fn bypasses_pause(&self) -> bool {
        matches!(self, Category::Warning | Category::Error)
    }

    /// Never removed by the age-based sweep
    pub fn is_age_exempt(&self) -> bool {
        matches!(self, Category::Warning | Category::Error)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Category::Info),
            "success" => Ok(Category::Success),
            "warning" | "warn" => Ok(Category::Warning),
            "error" => Ok(Category::Error),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Optional payload attached to an event
///
/// Serialized as `{"kind": "text", "value": "..."}` or
/// `{"kind": "structured", "value": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Detail {
    /// Free-text block, e.g. a captured backtrace
    Text(String),
    /// Key/value snapshot, e.g. a request or response
    Structured(Map<String, Value>),
}

impl Detail {
    /// Build a text detail
    pub fn text(value: impl Into<String>) -> Self {
        Detail::Text(value.into())
    }

    /// Build a structured detail from any JSON value
    ///
    /// Objects are kept as-is; strings become [`Detail::Text`]; any other
    /// value is wrapped under a `"value"` key.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Detail::Structured(map),
            Value::String(s) => Detail::Text(s),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                Detail::Structured(map)
            }
        }
    }
}

impl From<&str> for Detail {
    fn from(value: &str) -> Self {
        Detail::Text(value.to_string())
    }
}

impl From<String> for Detail {
    fn from(value: String) -> Self {
        Detail::Text(value)
    }
}

impl From<Map<String, Value>> for Detail {
    fn from(value: Map<String, Value>) -> Self {
        Detail::Structured(value)
    }
}

/// Unique, monotonically increasing event identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evt_{}", self.0)
    }
}

/// An immutable diagnostic event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Assigned at creation, never reused within a process
    pub id: EventId,

    pub category: Category,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Detail>,

    /// Milliseconds since the Unix epoch, strictly increasing in call order
    #[serde(rename = "ts")]
    pub timestamp: i64,
}

impl Event {
    /// Create a new event
    pub fn new(
        id: EventId,
        category: Category,
        message: impl Into<String>,
        detail: Option<Detail>,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            category,
            message: message.into(),
            detail,
            timestamp,
        }
    }

    /// Age of the event relative to `now_ms`
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Warning).unwrap();
        assert_eq!(json, "\"warning\"");

        let parsed: Category = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, Category::Error);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("INFO".parse::<Category>().unwrap(), Category::Info);
        assert_eq!("warn".parse::<Category>().unwrap(), Category::Warning);
        assert!("fatal".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_policies() {
        assert!(Category::Error.is_sticky());
        assert!(!Category::Warning.is_sticky());

        assert!(Category::Warning.bypasses_rate_limit());
        assert!(!Category::Info.bypasses_rate_limit());

        // Warnings are still deduplicated; only errors skip it
        assert!(!Category::Warning.bypasses_dedup());
        assert!(Category::Error.bypasses_dedup());

        assert!(Category::Warning.bypasses_pause());
        assert!(!Category::Success.bypasses_pause());
    }

    #[test]
    fn test_detail_tagged_serialization() {
        let text = Detail::text("stack trace");
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(json, json!({"kind": "text", "value": "stack trace"}));

        let structured = Detail::from_value(json!({"status": 503}));
        let json = serde_json::to_value(&structured).unwrap();
        assert_eq!(json, json!({"kind": "structured", "value": {"status": 503}}));
    }

    #[test]
    fn test_detail_from_non_object_value() {
        let detail = Detail::from_value(json!([1, 2]));
        match detail {
            Detail::Structured(map) => assert_eq!(map.get("value"), Some(&json!([1, 2]))),
            Detail::Text(_) => panic!("expected structured detail"),
        }

        assert_eq!(Detail::from_value(json!("plain")), Detail::text("plain"));
    }

    #[test]
    fn test_event_serialization_skips_missing_detail() {
        let event = Event::new(EventId(7), Category::Info, "hello", None, 1_704_067_200_000);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"ts\":1704067200000"));
        assert!(!json.contains("detail"));
    }
}
