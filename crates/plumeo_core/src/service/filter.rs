//! Story filtering for the catalog view.
//!
//! # Responsibility
//! - Select the displayed subset from a text query or a genre chip.
//!
//! # Invariants
//! - Output preserves catalog order; nothing is ranked or sorted.
//! - A blank query selects the whole catalog.
//! - Only one filter is active; a new one replaces the previous.

use crate::model::catalog::Catalog;
use crate::model::story::Story;
use log::debug;

/// The filter currently driving the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoryFilter {
    #[default]
    All,
    /// Case-insensitive substring over title, author and genre.
    Text(String),
    /// Exact, case-sensitive genre.
    Genre(String),
}

impl StoryFilter {
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Story> {
        let stories = match self {
            Self::All => catalog.stories().iter().collect(),
            Self::Text(query) => filter_by_text(catalog, query),
            Self::Genre(genre) => filter_by_genre(catalog, genre),
        };
        debug!(
            "event=filter_apply module=service status=ok filter={} matched={}",
            self.kind(),
            stories.len()
        );
        stories
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Text(_) => "text",
            Self::Genre(_) => "genre",
        }
    }
}

/// Filters by free text. Blank queries return the full catalog.
pub fn filter_by_text<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Story> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.stories().iter().collect();
    }

    catalog
        .stories()
        .iter()
        .filter(|story| story.matches_lowercase(&needle))
        .collect()
}

/// Filters by exact genre name.
pub fn filter_by_genre<'a>(catalog: &'a Catalog, genre: &str) -> Vec<&'a Story> {
    catalog
        .stories()
        .iter()
        .filter(|story| story.genre == genre)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_by_genre, filter_by_text, StoryFilter};
    use crate::model::catalog::Catalog;

    fn ids(stories: Vec<&crate::model::story::Story>) -> Vec<&str> {
        stories.into_iter().map(|story| story.id.as_str()).collect()
    }

    #[test]
    fn whitespace_query_matches_everything() {
        let catalog = Catalog::sample();
        assert_eq!(ids(filter_by_text(&catalog, "   ")).len(), 6);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let catalog = Catalog::sample();
        assert_eq!(ids(filter_by_text(&catalog, "  noor ")), vec!["s2"]);
    }

    #[test]
    fn genre_match_is_case_sensitive() {
        let catalog = Catalog::sample();
        assert!(filter_by_genre(&catalog, "romance").is_empty());
    }

    #[test]
    fn default_filter_selects_all() {
        let catalog = Catalog::sample();
        assert_eq!(StoryFilter::default().apply(&catalog).len(), catalog.len());
    }
}
