//! Utility functions and helpers
//!
//! This module contains timestamp utilities.

pub mod time;

pub use time::{current_timestamp_ms, format_rfc3339, format_time_of_day};
