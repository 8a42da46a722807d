//! Data types for the diagnostic log
//!
//! This module contains the event model shared by every other module.

mod counts;
mod event;

pub use counts::Counts;
pub use event::{Category, Detail, Event, EventId, ParseCategoryError};
