//! Story card view derivation.
//!
//! # Responsibility
//! - Turn (stories x reading list x like counts) into renderable cards.
//! - Decide the empty-state message for both grids.
//!
//! # Invariants
//! - Derivation is pure; nothing here reads or writes persistence.
//! - Reading-list cards follow catalog order; stale saved ids are skipped.

use crate::model::catalog::Catalog;
use crate::model::story::{Story, StoryId};
use crate::repo::reading_list::ReadingList;
use crate::service::like_counter::LikeCounter;
use serde::Serialize;

/// Shown in the catalog grid when the active filter matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No stories match your search.";
/// Shown in the reading-list grid when it derives no cards.
pub const EMPTY_READING_LIST_MESSAGE: &str =
    "Your reading list is empty. Save stories to see them here.";

/// Label of the save affordance on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SaveLabel {
    Save,
    Saved,
}

impl SaveLabel {
    pub fn for_membership(saved: bool) -> Self {
        if saved {
            Self::Saved
        } else {
            Self::Save
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::Saved => "Saved",
        }
    }
}

/// One renderable story card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryCard {
    pub story_id: StoryId,
    /// Initials of the first two title words.
    pub thumb: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub excerpt: String,
    pub likes: u64,
    pub save_label: SaveLabel,
}

impl StoryCard {
    pub fn derive(story: &Story, saved: &ReadingList, likes: &LikeCounter) -> Self {
        Self {
            story_id: story.id.clone(),
            thumb: thumb_initials(&story.title),
            title: story.title.clone(),
            author: story.author.clone(),
            genre: story.genre.clone(),
            excerpt: story.excerpt.clone(),
            likes: likes.get(&story.id),
            save_label: SaveLabel::for_membership(saved.contains(&story.id)),
        }
    }
}

/// Contents of the main story grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoriesView {
    pub cards: Vec<StoryCard>,
    /// Set only when `cards` is empty.
    pub empty_message: Option<&'static str>,
}

/// Contents of the reading-list grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingListView {
    pub cards: Vec<StoryCard>,
    /// Set only when `cards` is empty.
    pub empty_message: Option<&'static str>,
}

/// Derives the first letter of each of the first two title words.
pub fn thumb_initials(title: &str) -> String {
    title
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn render_stories(stories: &[&Story], saved: &ReadingList, likes: &LikeCounter) -> StoriesView {
    let cards: Vec<StoryCard> = stories
        .iter()
        .map(|story| StoryCard::derive(story, saved, likes))
        .collect();
    let empty_message = cards.is_empty().then_some(NO_RESULTS_MESSAGE);
    StoriesView {
        cards,
        empty_message,
    }
}

pub fn render_reading_list(
    catalog: &Catalog,
    saved: &ReadingList,
    likes: &LikeCounter,
) -> ReadingListView {
    let cards: Vec<StoryCard> = catalog
        .stories()
        .iter()
        .filter(|story| saved.contains(&story.id))
        .map(|story| StoryCard::derive(story, saved, likes))
        .collect();
    let empty_message = cards.is_empty().then_some(EMPTY_READING_LIST_MESSAGE);
    ReadingListView {
        cards,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::{render_reading_list, render_stories, thumb_initials, SaveLabel};
    use crate::model::catalog::Catalog;
    use crate::repo::reading_list::ReadingList;
    use crate::service::like_counter::LikeCounter;

    #[test]
    fn thumb_uses_first_two_words() {
        assert_eq!(thumb_initials("The Second Chapter"), "TS");
        assert_eq!(thumb_initials("Cafe at Dawn"), "Ca");
        assert_eq!(thumb_initials("Solo"), "S");
        assert_eq!(thumb_initials("   "), "");
    }

    #[test]
    fn save_label_tracks_membership() {
        let catalog = Catalog::sample();
        let likes = LikeCounter::seeded(&catalog);
        let saved: ReadingList = ["s3".to_string()].into_iter().collect();
        let stories: Vec<_> = catalog.stories().iter().collect();

        let view = render_stories(&stories, &saved, &likes);
        let labels: Vec<SaveLabel> = view.cards.iter().map(|card| card.save_label).collect();
        assert_eq!(labels[2], SaveLabel::Saved);
        assert_eq!(labels.iter().filter(|label| **label == SaveLabel::Saved).count(), 1);
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn stale_only_reading_list_shows_empty_message() {
        let catalog = Catalog::sample();
        let likes = LikeCounter::seeded(&catalog);
        let saved: ReadingList = ["gone".to_string()].into_iter().collect();

        let view = render_reading_list(&catalog, &saved, &likes);
        assert!(view.cards.is_empty());
        assert!(view.empty_message.is_some());
    }
}
