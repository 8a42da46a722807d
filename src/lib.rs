//! Diagnostic Log
//!
//! A bounded, in-memory diagnostic event log for interactive debugging of a
//! slow and flaky upstream service. Every screen and API wrapper records into
//! it; a single rendering surface reads it back.
//!
//! # Features
//!
//! - **Bounded**: routine events live in a capped ring buffer and are aged
//!   out by a background sweeper
//! - **Quiet**: per-category rate limiting and duplicate suppression
//! - **Errors stick**: errors go to their own bounded collection and are
//!   never rate limited, deduplicated or dropped while paused
//! - **Pause**: freeze routine noise while keeping errors and warnings
//! - **Fail-silent**: `record()` never returns an error or panics
//!
//! # Modules
//!
//! - `types`: Event model (`Event`, `Category`, `Detail`, `Counts`)
//! - `throttle`: Rate limiter and deduplicator
//! - `event_store`: Bounded storage, retention sweeper, suppression stats
//! - `diagnostic_log`: The query/control facade
//! - `export`: Plain-text export for the clipboard
//! - `config`: Configuration with environment overrides
//! - `clock`: Wall-clock abstraction
//! - `api`: HTTP rendering surface
//! - `utils`: Timestamp helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use diagnostic_log::{Category, DiagnosticLog, LogConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let log = Arc::new(DiagnosticLog::with_config(LogConfig::default()));
//!     let sweeper = log.start_sweeper();
//!
//!     log.info("Preparing prompt");
//!     log.record_text(Category::Error, "Request failed", "timeout after 30s");
//!
//!     println!("{}", log.export(None));
//!     sweeper.cancel().await;
//! }
//! ```

pub mod api;
pub mod clock;
pub mod config;
pub mod diagnostic_log;
pub mod error;
pub mod event_store;
pub mod export;
pub mod throttle;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::LogConfig;
pub use diagnostic_log::DiagnosticLog;
pub use error::{ConfigError, Error, Result};
pub use event_store::{SuppressionStats, SweepReport, SweeperHandle};
pub use types::{Category, Counts, Detail, Event, EventId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
