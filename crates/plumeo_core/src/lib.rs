//! Core logic for the Plumeo story-sharing prototype.
//! This crate is the single source of truth for catalog, reading-list and
//! view-derivation invariants; UI layers only apply the effects it returns.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use app::auth_modal::{AuthMode, AuthModal, AuthModalView};
pub use app::command::{Command, Effect, Key};
pub use app::navigation::{Route, SectionVisibility};
pub use app::state::{App, AppError, AppState};
pub use config::{open_session, AppConfig, SessionError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{Catalog, CatalogError};
pub use model::story::{Story, StoryId};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use repo::reading_list::{
    LoadStatus, ReadingList, ReadingListError, ReadingListLoad, ReadingListResult,
    ReadingListStore, READING_LIST_STORAGE_KEY,
};
pub use service::filter::{filter_by_genre, filter_by_text, StoryFilter};
pub use service::like_counter::{LikeCounter, LikeOutcome, LIKE_EMPHASIS_DURATION};
pub use service::render::{
    render_reading_list, render_stories, thumb_initials, ReadingListView, SaveLabel, StoriesView,
    StoryCard, EMPTY_READING_LIST_MESSAGE, NO_RESULTS_MESSAGE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
