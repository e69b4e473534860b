//! Fixed in-memory story catalog.
//!
//! # Responsibility
//! - Validate and hold the story set that every view derives from.
//! - Provide lookup by id and the distinct genre list for genre chips.
//!
//! # Invariants
//! - Ids are non-empty, match `[A-Za-z0-9_-]+` and are unique.
//! - Iteration order is the construction order and is never re-sorted.

use crate::model::story::{Story, StoryId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

static STORY_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid story id regex"));

/// (id, title, author, genre, excerpt, likes)
const SAMPLE_STORIES: &[(&str, &str, &str, &str, &str, u64)] = &[
    ("s1", "Moonlight Sonata", "A. Faiza", "Romance", "A soft summer night, a secret letter...", 48),
    ("s2", "Paper Wings", "Z. Noor", "Fantasy", "When paper birds learn to carry wishes...", 120),
    ("s3", "Cafe at Dawn", "S. Karim", "Slice of Life", "Steam rising, a pen scratching ideas...", 32),
    ("s4", "Starlit Promises", "L. Rahman", "Romance", "Two promises beneath a starlit sky...", 76),
    ("s5", "Glass Orchard", "R. Iqbal", "Magical Realism", "Orchards that reflect memories...", 55),
    ("s6", "The Second Chapter", "F. Yousaf", "Drama", "Chapters that begin where others end...", 18),
];

/// Catalog construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    EmptyId,
    InvalidId(String),
    DuplicateId(StoryId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "story id cannot be empty"),
            Self::InvalidId(id) => write!(f, "story id `{id}` contains unsupported characters"),
            Self::DuplicateId(id) => write!(f, "duplicate story id: {id}"),
        }
    }
}

impl Error for CatalogError {}

/// Immutable ordered set of stories.
#[derive(Debug, Clone)]
pub struct Catalog {
    stories: Vec<Story>,
    index: HashMap<StoryId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty, malformed or duplicate ids.
    pub fn new(stories: Vec<Story>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(stories.len());
        for (position, story) in stories.iter().enumerate() {
            validate_story_id(&story.id)?;
            if index.insert(story.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(story.id.clone()));
            }
        }

        Ok(Self { stories, index })
    }

    /// Returns the built-in sample catalog.
    pub fn sample() -> Self {
        let stories = SAMPLE_STORIES
            .iter()
            .map(|(id, title, author, genre, excerpt, likes)| {
                Story::new(*id, *title, *author, *genre, *excerpt, *likes)
            })
            .collect::<Vec<_>>();
        // Sample ids are static and already unique.
        let index = stories
            .iter()
            .enumerate()
            .map(|(position, story)| (story.id.clone(), position))
            .collect();
        Self { stories, index }
    }

    /// All stories in catalog order.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn get(&self, id: &str) -> Option<&Story> {
        self.index.get(id).map(|position| &self.stories[*position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Distinct genres in order of first appearance.
    pub fn genres(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.stories
            .iter()
            .map(|story| story.genre.as_str())
            .filter(|genre| seen.insert(*genre))
            .collect()
    }
}

fn validate_story_id(id: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::EmptyId);
    }
    if !STORY_ID_RE.is_match(id) {
        return Err(CatalogError::InvalidId(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::model::story::Story;

    fn story(id: &str, genre: &str) -> Story {
        Story::new(id, format!("Title {id}"), "Author", genre, "excerpt", 1)
    }

    #[test]
    fn sample_catalog_has_six_stories_in_order() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.stories().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3", "s4", "s5", "s6"]);
        assert_eq!(catalog.get("s2").map(|s| s.title.as_str()), Some("Paper Wings"));
    }

    #[test]
    fn sample_catalog_passes_validation() {
        let sample = Catalog::sample();
        let rebuilt = Catalog::new(sample.stories().to_vec()).expect("sample ids should be valid");
        assert_eq!(rebuilt.len(), 6);
    }

    #[test]
    fn genres_are_distinct_in_first_appearance_order() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.genres(),
            vec!["Romance", "Fantasy", "Slice of Life", "Magical Realism", "Drama"]
        );
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![story("a", "x"), story("a", "y")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".to_string()));
    }

    #[test]
    fn new_rejects_empty_and_malformed_ids() {
        assert_eq!(
            Catalog::new(vec![story("  ", "x")]).unwrap_err(),
            CatalogError::EmptyId
        );
        assert!(matches!(
            Catalog::new(vec![story("s 1", "x")]).unwrap_err(),
            CatalogError::InvalidId(id) if id == "s 1"
        ));
    }
}
