//! Per-category counters derived from the store contents

use serde::{Deserialize, Serialize};

use super::{Category, Event};

/// Live event counts, recomputed on every read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub total: usize,
    pub error: usize,
    pub warning: usize,
    pub success: usize,
    pub info: usize,
}

impl Counts {
    /// Tally a sequence of events
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut counts = Counts::default();
        for event in events {
            counts.add(event.category);
        }
        counts
    }

    /// Count for a single category
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Info => self.info,
            Category::Success => self.success,
            Category::Warning => self.warning,
            Category::Error => self.error,
        }
    }

    fn add(&mut self, category: Category) {
        self.total += 1;
        match category {
            Category::Info => self.info += 1,
            Category::Success => self.success += 1,
            Category::Warning => self.warning += 1,
            Category::Error => self.error += 1,
        }
    }
}
