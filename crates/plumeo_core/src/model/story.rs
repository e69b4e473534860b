//! Story domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered as a story card.
//!
//! # Invariants
//! - `id` never changes for the lifetime of a catalog.
//! - `likes` is only the seed value; live counts live in `LikeCounter`.

use serde::{Deserialize, Serialize};

/// Stable identifier for a story.
///
/// Kept as a type alias so reading-list payloads stay plain JSON strings.
pub type StoryId = String;

/// Immutable story record owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub author: String,
    /// Free text; several stories may share one genre.
    pub genre: String,
    pub excerpt: String,
    /// Initial like count used to seed the per-process counter.
    pub likes: u64,
}

impl Story {
    pub fn new(
        id: impl Into<StoryId>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        excerpt: impl Into<String>,
        likes: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            excerpt: excerpt.into(),
            likes,
        }
    }

    /// Case-insensitive substring match against title, author and genre.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.genre.to_lowercase().contains(needle)
    }
}
