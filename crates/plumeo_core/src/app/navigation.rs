//! Client-side routes and section visibility.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Genres,
    ReadingList,
    /// Placeholder; shows the featured grid only.
    Library,
}

impl Route {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Genres => "genres",
            Self::ReadingList => "reading-list",
            Self::Library => "library",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "home" => Ok(Self::Home),
            "genres" => Ok(Self::Genres),
            "reading-list" => Ok(Self::ReadingList),
            "library" => Ok(Self::Library),
            other => Err(other.to_string()),
        }
    }
}

/// Which page sections the surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionVisibility {
    pub hero: bool,
    pub featured: bool,
    pub genres: bool,
    pub reading_list: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::for_route(Route::Home)
    }
}

impl SectionVisibility {
    pub fn for_route(route: Route) -> Self {
        let hidden = Self {
            hero: false,
            featured: false,
            genres: false,
            reading_list: false,
        };
        match route {
            Route::Home => Self {
                hero: true,
                featured: true,
                genres: true,
                reading_list: true,
            },
            Route::Genres => Self {
                genres: true,
                ..hidden
            },
            Route::ReadingList => Self {
                reading_list: true,
                ..hidden
            },
            Route::Library => Self {
                featured: true,
                ..hidden
            },
        }
    }

    /// Selecting a genre chip reveals every section; the hero keeps its state.
    pub fn reveal_sections(self) -> Self {
        Self {
            hero: self.hero,
            featured: true,
            genres: true,
            reading_list: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Route, SectionVisibility};

    #[test]
    fn routes_round_trip_through_their_names() {
        for route in [Route::Home, Route::Genres, Route::ReadingList, Route::Library] {
            assert_eq!(route.as_str().parse::<Route>(), Ok(route));
        }
        assert_eq!("profile".parse::<Route>(), Err("profile".to_string()));
    }

    #[test]
    fn genres_route_shows_only_genres() {
        let sections = SectionVisibility::for_route(Route::Genres);
        assert!(sections.genres);
        assert!(!sections.hero && !sections.featured && !sections.reading_list);
    }

    #[test]
    fn reveal_keeps_hero_hidden() {
        let sections = SectionVisibility::for_route(Route::Genres).reveal_sections();
        assert!(!sections.hero);
        assert!(sections.featured && sections.genres && sections.reading_list);
    }
}
