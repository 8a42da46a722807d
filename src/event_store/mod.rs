//! Event Store Module
//!
//! This module provides the bounded storage behind the diagnostic log:
//! - `EventStore`: routine ring buffer plus sticky error collection
//! - `RetentionSweeper`: periodic age/size pruning of the routine buffer
//! - `SuppressionStats`: counters for everything dropped or evicted
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//! ┌──────────┐   ┌────────────┐   ┌─────────┐   ┌────────────┐   ┌──────────────────┐
//! │ record() │──►│ RateLimiter│──►│ Dedup   │──►│ Pause gate │──►│ routine | sticky │
//! └──────────┘   └────────────┘   └─────────┘   └────────────┘   └──────────────────┘
//!                                                                        ▲
//! Background:                                    RetentionSweeper ───────┘ (routine only)
//! ```

mod stats;
mod store;
mod sweeper;

pub use stats::SuppressionStats;
pub use store::{EventStore, Insertion, SweepReport};
pub use sweeper::{RetentionSweeper, Sweep, SweeperHandle};
