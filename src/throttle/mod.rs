//! Write-side throttling
//!
//! Both filters run before an event reaches the store:
//! - `RateLimiter`: at most N events per category per window
//! - `Deduplicator`: identical (category, message) pairs within a short window
//!
//! Errors pass through both; warnings pass through the limiter only.

mod dedup;
mod rate_limiter;

pub use dedup::Deduplicator;
pub use rate_limiter::RateLimiter;
