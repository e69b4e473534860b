//! FFI use-case API for the UI surface.
//!
//! # Responsibility
//! - Map each UI event to one core `Command` on a process-wide session.
//! - Flatten returned effects into plain DTOs the UI can apply.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures come back as `ok=false` with a message; state stays usable.

use plumeo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_session,
    ping as ping_inner, App, AppConfig, Command, Effect, Key, ReadingListView,
    SqliteKeyValueStore, StoriesView, StoryCard,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

const SESSION_DB_FILE_NAME: &str = "plumeo_reading_list.sqlite3";

static SESSION: Mutex<Option<App<SqliteKeyValueStore>>> = Mutex::new(None);

/// Minimal health-check API.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to repeat with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Card shown in either grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiCard {
    pub story_id: String,
    pub thumb: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub excerpt: String,
    pub likes: u64,
    /// `Save` or `Saved`.
    pub save_label: String,
}

/// Full contents of one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiGrid {
    pub cards: Vec<UiCard>,
    /// Present only when `cards` is empty.
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLike {
    pub story_id: String,
    pub likes: u64,
    /// Milliseconds until the "liked" highlight should be removed.
    pub emphasis_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSections {
    pub route: String,
    pub hero: bool,
    pub featured: bool,
    pub genres: bool,
    pub reading_list: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiAuthModal {
    pub visible: bool,
    pub mode: String,
    pub title: String,
    pub switch_label: String,
}

/// Everything the UI must redraw after one event. `None` fields are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiUpdate {
    pub ok: bool,
    pub message: String,
    pub stories: Option<UiGrid>,
    pub reading_list: Option<UiGrid>,
    pub genres: Option<Vec<String>>,
    pub like: Option<UiLike>,
    pub sections: Option<UiSections>,
    pub auth_modal: Option<UiAuthModal>,
}

impl UiUpdate {
    fn from_effects(effects: Vec<Effect>) -> Self {
        let mut update = Self {
            ok: true,
            ..Self::default()
        };
        for effect in effects {
            match effect {
                Effect::RenderStories(view) => update.stories = Some(stories_grid(view)),
                Effect::RenderReadingList(view) => {
                    update.reading_list = Some(reading_list_grid(view))
                }
                Effect::RenderGenreChips(genres) => update.genres = Some(genres),
                Effect::UpdateLike(outcome) => {
                    update.like = Some(UiLike {
                        story_id: outcome.story_id,
                        likes: outcome.likes,
                        emphasis_ms: u64::try_from(outcome.emphasis.as_millis())
                            .unwrap_or(u64::MAX),
                    })
                }
                Effect::ShowSections { route, sections } => {
                    update.sections = Some(UiSections {
                        route: route.as_str().to_string(),
                        hero: sections.hero,
                        featured: sections.featured,
                        genres: sections.genres,
                        reading_list: sections.reading_list,
                    })
                }
                Effect::ShowAuthModal(view) => {
                    update.auth_modal = Some(UiAuthModal {
                        visible: true,
                        mode: view.mode.as_str().to_string(),
                        title: view.title.to_string(),
                        switch_label: view.switch_label.to_string(),
                    })
                }
                Effect::HideAuthModal => {
                    update.auth_modal = Some(UiAuthModal {
                        visible: false,
                        mode: String::new(),
                        title: String::new(),
                        switch_label: String::new(),
                    })
                }
            }
        }
        update
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Opens (or replaces) the session over the SQLite file at `db_path`.
///
/// Returns an empty string on success and the error message otherwise.
/// Like counts of a replaced session are discarded.
#[flutter_rust_bridge::frb(sync)]
pub fn session_open(db_path: String) -> String {
    let trimmed = db_path.trim();
    if trimmed.is_empty() {
        return "db_path cannot be empty".to_string();
    }
    let config = AppConfig::default().with_db_path(trimmed);
    match open_session(&config) {
        Ok(app) => {
            *lock_session() = Some(app);
            String::new()
        }
        Err(err) => format!("session_open failed: {err}"),
    }
}

/// First paint: full catalog, genre chips and reading list.
#[flutter_rust_bridge::frb(sync)]
pub fn session_start() -> UiUpdate {
    with_session(|app| Ok(app.start()))
}

/// Search submit (button or Enter). A blank query shows everything.
#[flutter_rust_bridge::frb(sync)]
pub fn search_submit(query: String) -> UiUpdate {
    dispatch(Command::Search(query))
}

#[flutter_rust_bridge::frb(sync)]
pub fn genre_select(genre: String) -> UiUpdate {
    dispatch(Command::SelectGenre(genre))
}

#[flutter_rust_bridge::frb(sync)]
pub fn reading_list_toggle(story_id: String) -> UiUpdate {
    dispatch(Command::ToggleSave(story_id.trim().to_string()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn story_like(story_id: String) -> UiUpdate {
    dispatch(Command::Like(story_id.trim().to_string()))
}

/// Route names: `home|genres|reading-list|library`.
#[flutter_rust_bridge::frb(sync)]
pub fn navigate(route: String) -> UiUpdate {
    match Command::navigate_to(&route) {
        Ok(command) => dispatch(command),
        Err(err) => UiUpdate::failure(format!("navigate failed: {err}")),
    }
}

/// Modes: `login|signup`.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_open(mode: String) -> UiUpdate {
    match Command::open_auth(&mode) {
        Ok(command) => dispatch(command),
        Err(err) => UiUpdate::failure(format!("auth_open failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn auth_close() -> UiUpdate {
    dispatch(Command::CloseAuth)
}

#[flutter_rust_bridge::frb(sync)]
pub fn auth_switch() -> UiUpdate {
    dispatch(Command::SwitchAuthMode)
}

/// Global key-up handler; `Escape` closes the auth modal.
#[flutter_rust_bridge::frb(sync)]
pub fn key_up(key: String) -> UiUpdate {
    dispatch(Command::KeyPressed(Key::from_name(key.as_str())))
}

fn dispatch(command: Command) -> UiUpdate {
    let name = command.name();
    with_session(|app| {
        app.dispatch(command)
            .map_err(|err| format!("{name} failed: {err}"))
    })
}

fn with_session(
    f: impl FnOnce(&mut App<SqliteKeyValueStore>) -> Result<Vec<Effect>, String>,
) -> UiUpdate {
    let mut guard = lock_session();
    if guard.is_none() {
        let config = AppConfig::default().with_db_path(default_db_path());
        match open_session(&config) {
            Ok(app) => *guard = Some(app),
            Err(err) => return UiUpdate::failure(format!("session open failed: {err}")),
        }
    }
    let Some(app) = guard.as_mut() else {
        return UiUpdate::failure("session unavailable");
    };
    match f(app) {
        Ok(effects) => UiUpdate::from_effects(effects),
        Err(message) => UiUpdate::failure(message),
    }
}

fn lock_session() -> MutexGuard<'static, Option<App<SqliteKeyValueStore>>> {
    // Commands never leave partial writes behind, so a poisoned lock is usable.
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn default_db_path() -> PathBuf {
    std::env::temp_dir().join(SESSION_DB_FILE_NAME)
}

fn stories_grid(view: StoriesView) -> UiGrid {
    UiGrid {
        cards: view.cards.into_iter().map(ui_card).collect(),
        empty_message: view.empty_message.map(str::to_string),
    }
}

fn reading_list_grid(view: ReadingListView) -> UiGrid {
    UiGrid {
        cards: view.cards.into_iter().map(ui_card).collect(),
        empty_message: view.empty_message.map(str::to_string),
    }
}

fn ui_card(card: StoryCard) -> UiCard {
    UiCard {
        story_id: card.story_id,
        thumb: card.thumb,
        title: card.title,
        author: card.author,
        genre: card.genre,
        excerpt: card.excerpt,
        likes: card.likes,
        save_label: card.save_label.as_str().to_string(),
    }
}
