//! Persisted reading list (saved story ids).
//!
//! # Responsibility
//! - Read and write the saved-id set through one key-value slot.
//! - Own the only mutating entry point (`toggle`).
//!
//! # Invariants
//! - The payload is a JSON array of unique id strings.
//! - Loads fail soft: absent or malformed payloads yield an empty set.
//! - Saves replace the whole payload; there is no incremental patching.
//! - Two toggles of the same id restore the previous contents.

use crate::model::story::StoryId;
use crate::repo::kv_store::{KeyValueStore, StorageError};
use log::{debug, error, info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the reading-list slot.
pub const READING_LIST_STORAGE_KEY: &str = "plumeo_reading_list";

pub type ReadingListResult<T> = Result<T, ReadingListError>;

/// Saved story ids. Ordered for deterministic payloads; order carries no meaning.
pub type ReadingList = BTreeSet<StoryId>;

/// Write-path failure for the reading list.
#[derive(Debug)]
pub enum ReadingListError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for ReadingListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode reading list: {err}"),
        }
    }
}

impl Error for ReadingListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for ReadingListError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for ReadingListError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// How a load obtained its result.
///
/// Callers that only need the ids use [`ReadingListStore::load`]; callers
/// that want to report corruption inspect this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Payload present and well-formed.
    Clean,
    /// No payload stored yet.
    Absent,
    /// Payload present but not a JSON array of strings.
    Malformed(String),
    /// The persistence surface itself failed to read.
    Unreadable(String),
}

impl LoadStatus {
    /// Whether an empty result was substituted for a failure.
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::Unreadable(_))
    }
}

/// Result of a fail-soft load: the ids plus the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingListLoad {
    pub ids: ReadingList,
    pub status: LoadStatus,
}

/// Reading-list persistence over a key-value store.
pub struct ReadingListStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ReadingListStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Loads the saved ids, substituting an empty set on any failure.
    pub fn load(&self) -> ReadingList {
        self.load_checked().ids
    }

    /// Loads the saved ids and reports whether recovery happened.
    ///
    /// Never fails; recovered loads are logged at `warn`.
    pub fn load_checked(&self) -> ReadingListLoad {
        let payload = match self.store.get(READING_LIST_STORAGE_KEY) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=reading_list_load module=repo status=recovered reason=unreadable error={err}"
                );
                return ReadingListLoad {
                    ids: ReadingList::new(),
                    status: LoadStatus::Unreadable(err.to_string()),
                };
            }
        };

        // An empty string counts as "nothing saved yet", like a missing key.
        let Some(payload) = payload.filter(|payload| !payload.is_empty()) else {
            debug!("event=reading_list_load module=repo status=ok reason=absent");
            return ReadingListLoad {
                ids: ReadingList::new(),
                status: LoadStatus::Absent,
            };
        };

        match decode_payload(&payload) {
            Ok(ids) => {
                debug!(
                    "event=reading_list_load module=repo status=ok count={}",
                    ids.len()
                );
                ReadingListLoad {
                    ids,
                    status: LoadStatus::Clean,
                }
            }
            Err(err) => {
                warn!(
                    "event=reading_list_load module=repo status=recovered reason=malformed payload_len={} error={err}",
                    payload.len()
                );
                ReadingListLoad {
                    ids: ReadingList::new(),
                    status: LoadStatus::Malformed(err.to_string()),
                }
            }
        }
    }

    /// Replaces the persisted payload with `ids`; duplicates collapse.
    pub fn save<I>(&self, ids: I) -> ReadingListResult<()>
    where
        I: IntoIterator,
        I::Item: Into<StoryId>,
    {
        let ids: ReadingList = ids.into_iter().map(Into::into).collect();
        let payload = serde_json::to_string(&ids)?;
        if let Err(err) = self.store.set(READING_LIST_STORAGE_KEY, &payload) {
            error!(
                "event=reading_list_save module=repo status=error count={} error={err}",
                ids.len()
            );
            return Err(err.into());
        }
        debug!(
            "event=reading_list_save module=repo status=ok count={}",
            ids.len()
        );
        Ok(())
    }

    /// Adds `id` when absent or removes it when present, persists, and
    /// returns the new set.
    pub fn toggle(&self, id: &str) -> ReadingListResult<ReadingList> {
        let mut ids = self.load();
        let saved = if ids.remove(id) {
            false
        } else {
            ids.insert(id.to_string());
            true
        };
        self.save(ids.iter().cloned())?;
        info!(
            "event=reading_list_toggle module=repo status=ok story_id={id} saved={saved} count={}",
            ids.len()
        );
        Ok(ids)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.load().contains(id)
    }
}

fn decode_payload(payload: &str) -> Result<ReadingList, serde_json::Error> {
    let ids: Vec<StoryId> = serde_json::from_str(payload)?;
    Ok(ids.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::{decode_payload, LoadStatus};

    #[test]
    fn decode_collapses_duplicates() {
        let ids = decode_payload(r#"["s2","s1","s2"]"#).unwrap();
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["s1", "s2"]);
    }

    #[test]
    fn decode_rejects_non_string_arrays() {
        assert!(decode_payload("[1, 2]").is_err());
        assert!(decode_payload(r#"{"s1": true}"#).is_err());
        assert!(decode_payload("not json").is_err());
    }

    #[test]
    fn only_failures_count_as_recovered() {
        assert!(!LoadStatus::Clean.is_recovered());
        assert!(!LoadStatus::Absent.is_recovered());
        assert!(LoadStatus::Malformed("x".to_string()).is_recovered());
        assert!(LoadStatus::Unreadable("x".to_string()).is_recovered());
    }
}
