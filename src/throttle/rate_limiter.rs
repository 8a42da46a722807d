//! Per-category fixed-window rate limiter

use std::collections::HashMap;

use crate::types::Category;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    ends_at: i64,
}

/// Caps how many events of one category are accepted per window
///
/// Warnings and errors bypass the limiter entirely.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    window_ms: i64,
    max_per_window: u32,
    windows: HashMap<Category, Window>,
}

impl RateLimiter {
    /// Create a limiter accepting `max_per_window` events per `window_ms`
    pub fn new(window_ms: i64, max_per_window: u32) -> Self {
        Self {
            window_ms,
            max_per_window,
            windows: HashMap::new(),
        }
    }

    /// Decide whether an event of `category` at `now_ms` is accepted
    ///
    /// A call at or after the window end opens a new window and is always
    /// accepted. Backwards clock jumps simply keep the current window.
    pub fn allow(&mut self, category: Category, now_ms: i64) -> bool {
        if category.bypasses_rate_limit() {
            return true;
        }

        let window_ms = self.window_ms;
        let window = self.windows.entry(category).or_insert(Window {
            count: 0,
            ends_at: i64::MIN,
        });

        if now_ms >= window.ends_at {
            window.count = 1;
            window.ends_at = now_ms.saturating_add(window_ms);
            return true;
        }

        window.count = window.count.saturating_add(1);
        window.count <= self.max_per_window
    }

    /// Forget all windows
    pub fn clear(&mut self) {
        self.windows.clear();
    }

    /// Number of categories with an open window
    pub fn tracked_categories(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max_per_window() {
        let mut limiter = RateLimiter::new(1_000, 3);

        let results: Vec<bool> = (0..5).map(|i| limiter.allow(Category::Info, i)).collect();
        assert_eq!(results, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_window_resets_after_duration() {
        let mut limiter = RateLimiter::new(1_000, 3);
        for i in 0..5 {
            limiter.allow(Category::Info, i);
        }

        assert!(limiter.allow(Category::Info, 1_000));
        assert!(limiter.allow(Category::Info, 1_001));
    }

    #[test]
    fn test_categories_are_independent() {
        let mut limiter = RateLimiter::new(1_000, 1);

        assert!(limiter.allow(Category::Info, 0));
        assert!(!limiter.allow(Category::Info, 1));
        assert!(limiter.allow(Category::Success, 2));
    }

    #[test]
    fn test_warning_and_error_bypass() {
        let mut limiter = RateLimiter::new(1_000, 1);

        for i in 0..10 {
            assert!(limiter.allow(Category::Warning, i));
            assert!(limiter.allow(Category::Error, i));
        }
        assert_eq!(limiter.tracked_categories(), 0);
    }

    #[test]
    fn test_clear_resets_state() {
        let mut limiter = RateLimiter::new(1_000, 1);
        limiter.allow(Category::Info, 0);
        assert!(!limiter.allow(Category::Info, 1));

        limiter.clear();
        assert!(limiter.allow(Category::Info, 2));
    }
}
