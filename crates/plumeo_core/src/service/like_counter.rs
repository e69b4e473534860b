//! Per-process like counter.
//!
//! # Invariants
//! - Counts are seeded from the catalog and only ever increase.
//! - Nothing here is persisted; a new counter starts from the seeds again.

use crate::model::catalog::Catalog;
use crate::model::story::StoryId;
use log::debug;
use std::collections::HashMap;
use serde::Serialize;
use std::time::Duration;

/// How long the surface keeps the "liked" highlight before clearing it.
pub const LIKE_EMPHASIS_DURATION: Duration = Duration::from_millis(500);

/// Result of one like action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeOutcome {
    pub story_id: StoryId,
    /// Post-increment count to display immediately.
    pub likes: u64,
    /// Delay after which the cosmetic highlight is cleared.
    pub emphasis: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct LikeCounter {
    counts: HashMap<StoryId, u64>,
}

impl LikeCounter {
    /// Seeds one entry per catalog story from its initial `likes`.
    pub fn seeded(catalog: &Catalog) -> Self {
        let counts = catalog
            .stories()
            .iter()
            .map(|story| (story.id.clone(), story.likes))
            .collect();
        Self { counts }
    }

    /// Increments and returns the new count. Unknown ids count from zero.
    pub fn increment(&mut self, id: &str) -> u64 {
        let count = self.counts.entry(id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        debug!("event=story_like module=service status=ok story_id={id} likes={count}");
        *count
    }

    /// Increments and packages the result for the rendering surface.
    pub fn like(&mut self, id: &str) -> LikeOutcome {
        LikeOutcome {
            story_id: id.to_string(),
            likes: self.increment(id),
            emphasis: LIKE_EMPHASIS_DURATION,
        }
    }

    pub fn get(&self, id: &str) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::{LikeCounter, LIKE_EMPHASIS_DURATION};
    use crate::model::catalog::Catalog;

    #[test]
    fn increments_from_seed() {
        let mut counter = LikeCounter::seeded(&Catalog::sample());
        assert_eq!(counter.get("s1"), 48);
        counter.increment("s1");
        counter.increment("s1");
        assert_eq!(counter.increment("s1"), 51);
        assert_eq!(counter.get("s2"), 120);
    }

    #[test]
    fn unknown_ids_start_at_zero() {
        let mut counter = LikeCounter::seeded(&Catalog::sample());
        assert_eq!(counter.get("ghost"), 0);
        assert_eq!(counter.increment("ghost"), 1);
    }

    #[test]
    fn like_reports_emphasis_window() {
        let mut counter = LikeCounter::seeded(&Catalog::sample());
        let outcome = counter.like("s6");
        assert_eq!(outcome.likes, 19);
        assert_eq!(outcome.emphasis, LIKE_EMPHASIS_DURATION);
    }
}
