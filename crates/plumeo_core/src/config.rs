//! Explicit session configuration.
//!
//! There are no environment variables; callers build an `AppConfig` and
//! hand it to [`open_session`].

use crate::app::state::App;
use crate::logging::{default_log_level, init_logging};
use crate::repo::kv_store::{SqliteKeyValueStore, StorageError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file for the reading list. `None` keeps it in memory.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling logs. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>, level: impl Into<String>) -> Self {
        self.log_dir = Some(dir.into());
        self.log_level = level.into();
        self
    }
}

/// Error raised while bootstrapping a session.
#[derive(Debug)]
pub enum SessionError {
    Logging(String),
    Storage(StorageError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for SessionError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Initializes logging (when configured) and opens a sample-catalog session.
pub fn open_session(config: &AppConfig) -> Result<App<SqliteKeyValueStore>, SessionError> {
    if let Some(dir) = &config.log_dir {
        let dir = dir
            .to_str()
            .ok_or_else(|| SessionError::Logging("log_dir must be valid UTF-8".to_string()))?;
        init_logging(&config.log_level, dir).map_err(SessionError::Logging)?;
    }

    let store = match &config.db_path {
        Some(path) => SqliteKeyValueStore::open(path)?,
        None => SqliteKeyValueStore::open_in_memory()?,
    };
    Ok(App::with_sample_catalog(store))
}
