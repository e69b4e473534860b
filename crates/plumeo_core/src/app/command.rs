//! User-originated commands and the effects they produce.
//!
//! Every UI event maps to exactly one [`Command`]; dispatching it yields the
//! [`Effect`]s the rendering surface applies, in order.

use crate::app::auth_modal::{AuthMode, AuthModalView};
use crate::app::navigation::{Route, SectionVisibility};
use crate::app::state::AppError;
use crate::model::story::StoryId;
use crate::service::like_counter::LikeOutcome;
use crate::service::render::{ReadingListView, StoriesView};
use serde::Serialize;

/// Keys the core reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Maps a DOM-style key name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search submit (button click or Enter in the search box).
    Search(String),
    /// Genre chip click.
    SelectGenre(String),
    /// Save/Saved button click.
    ToggleSave(StoryId),
    /// Like button click.
    Like(StoryId),
    Navigate(Route),
    OpenAuth(AuthMode),
    CloseAuth,
    SwitchAuthMode,
    KeyPressed(Key),
}

impl Command {
    /// Builds a `Navigate` command from a route name such as `reading-list`.
    pub fn navigate_to(route: &str) -> Result<Self, AppError> {
        route
            .parse::<Route>()
            .map(Self::Navigate)
            .map_err(AppError::UnknownRoute)
    }

    /// Builds an `OpenAuth` command from `login` or `signup`.
    pub fn open_auth(mode: &str) -> Result<Self, AppError> {
        mode.parse::<AuthMode>()
            .map(Self::OpenAuth)
            .map_err(AppError::UnknownAuthMode)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::SelectGenre(_) => "select_genre",
            Self::ToggleSave(_) => "toggle_save",
            Self::Like(_) => "like",
            Self::Navigate(_) => "navigate",
            Self::OpenAuth(_) => "open_auth",
            Self::CloseAuth => "close_auth",
            Self::SwitchAuthMode => "switch_auth_mode",
            Self::KeyPressed(_) => "key_pressed",
        }
    }
}

/// A write to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "data", rename_all = "snake_case")]
pub enum Effect {
    RenderStories(StoriesView),
    RenderReadingList(ReadingListView),
    RenderGenreChips(Vec<String>),
    /// Updates one like control in place; no grid re-render.
    UpdateLike(LikeOutcome),
    ShowSections {
        route: Route,
        sections: SectionVisibility,
    },
    ShowAuthModal(AuthModalView),
    HideAuthModal,
}
