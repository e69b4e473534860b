//! Application state and command dispatch.
//!
//! # Responsibility
//! - Hold all per-process UI state explicitly instead of as ambient globals.
//! - Run one synchronous state transition per command.
//!
//! # Invariants
//! - Reading-list writes go through `ReadingListStore::toggle` only.
//! - A toggle re-derives both grids; a like only updates one control.
//! - Like counts are never persisted.

use crate::app::auth_modal::AuthModal;
use crate::app::command::{Command, Effect, Key};
use crate::app::navigation::{Route, SectionVisibility};
use crate::model::catalog::Catalog;
use crate::model::story::Story;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::reading_list::{ReadingListError, ReadingListStore};
use crate::service::filter::StoryFilter;
use crate::service::like_counter::LikeCounter;
use crate::service::render::{render_reading_list, render_stories, ReadingListView, StoriesView};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Dispatch failure. State stays consistent; the UI keeps running.
#[derive(Debug)]
pub enum AppError {
    ReadingList(ReadingListError),
    UnknownRoute(String),
    UnknownAuthMode(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadingList(err) => write!(f, "{err}"),
            Self::UnknownRoute(value) => write!(f, "unknown route `{value}`"),
            Self::UnknownAuthMode(value) => write!(f, "unknown auth mode `{value}`"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ReadingList(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReadingListError> for AppError {
    fn from(value: ReadingListError) -> Self {
        Self::ReadingList(value)
    }
}

/// In-memory UI state for one session.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub likes: LikeCounter,
    pub filter: StoryFilter,
    pub route: Route,
    pub sections: SectionVisibility,
    pub auth: AuthModal,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let likes = LikeCounter::seeded(&catalog);
        Self {
            catalog,
            likes,
            filter: StoryFilter::All,
            route: Route::Home,
            sections: SectionVisibility::default(),
            auth: AuthModal::default(),
        }
    }

    /// Stories selected by the active filter, in catalog order.
    pub fn displayed(&self) -> Vec<&Story> {
        self.filter.apply(&self.catalog)
    }
}

/// Session driver: state plus the reading-list persistence surface.
pub struct App<S: KeyValueStore> {
    state: AppState,
    reading_list: ReadingListStore<S>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self {
            state: AppState::new(catalog),
            reading_list: ReadingListStore::new(store),
        }
    }

    /// Session over the built-in sample catalog.
    pub fn with_sample_catalog(store: S) -> Self {
        Self::new(Catalog::sample(), store)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn reading_list(&self) -> &ReadingListStore<S> {
        &self.reading_list
    }

    /// Ends the session; like counts are discarded with it.
    pub fn into_store(self) -> S {
        self.reading_list.into_store()
    }

    /// Effects for the first paint.
    pub fn start(&self) -> Vec<Effect> {
        vec![
            Effect::RenderStories(self.stories_view()),
            Effect::RenderGenreChips(
                self.state
                    .catalog
                    .genres()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            Effect::RenderReadingList(self.reading_list_view()),
        ]
    }

    pub fn stories_view(&self) -> StoriesView {
        let saved = self.reading_list.load();
        render_stories(&self.state.displayed(), &saved, &self.state.likes)
    }

    pub fn reading_list_view(&self) -> ReadingListView {
        let saved = self.reading_list.load();
        render_reading_list(&self.state.catalog, &saved, &self.state.likes)
    }

    /// Applies one command and returns the surface updates, in order.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<Effect>, AppError> {
        let name = command.name();
        match self.apply(command) {
            Ok(effects) => {
                debug!(
                    "event=command_dispatch module=app status=ok command={name} effects={}",
                    effects.len()
                );
                Ok(effects)
            }
            Err(err) => {
                error!("event=command_dispatch module=app status=error command={name} error={err}");
                Err(err)
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<Vec<Effect>, AppError> {
        let effects = match command {
            Command::Search(query) => {
                self.state.filter = if query.trim().is_empty() {
                    StoryFilter::All
                } else {
                    StoryFilter::Text(query)
                };
                vec![Effect::RenderStories(self.stories_view())]
            }
            Command::SelectGenre(genre) => {
                self.state.filter = StoryFilter::Genre(genre);
                self.state.sections = self.state.sections.reveal_sections();
                vec![
                    Effect::RenderStories(self.stories_view()),
                    Effect::ShowSections {
                        route: self.state.route,
                        sections: self.state.sections,
                    },
                ]
            }
            Command::ToggleSave(id) => {
                let saved = self.reading_list.toggle(&id)?;
                let likes = &self.state.likes;
                vec![
                    Effect::RenderReadingList(render_reading_list(&self.state.catalog, &saved, likes)),
                    Effect::RenderStories(render_stories(&self.state.displayed(), &saved, likes)),
                ]
            }
            Command::Like(id) => vec![Effect::UpdateLike(self.state.likes.like(&id))],
            Command::Navigate(route) => {
                self.state.route = route;
                self.state.sections = SectionVisibility::for_route(route);
                let mut effects = vec![Effect::ShowSections {
                    route,
                    sections: self.state.sections,
                }];
                if route == Route::ReadingList {
                    effects.push(Effect::RenderReadingList(self.reading_list_view()));
                }
                effects
            }
            Command::OpenAuth(mode) => vec![Effect::ShowAuthModal(self.state.auth.open(mode))],
            Command::CloseAuth | Command::KeyPressed(Key::Escape) => self.close_auth(),
            Command::SwitchAuthMode => {
                let view = self.state.auth.switch_mode();
                if self.state.auth.is_open() {
                    vec![Effect::ShowAuthModal(view)]
                } else {
                    Vec::new()
                }
            }
            Command::KeyPressed(Key::Other(_)) => Vec::new(),
        };
        Ok(effects)
    }

    fn close_auth(&mut self) -> Vec<Effect> {
        if self.state.auth.close() {
            vec![Effect::HideAuthModal]
        } else {
            Vec::new()
        }
    }
}
