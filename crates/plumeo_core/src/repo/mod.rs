//! Persistence layer for the reading list.
//!
//! # Responsibility
//! - Define the key-value persistence surface contract.
//! - Keep payload encoding and fail-soft decoding out of services.
//!
//! # Invariants
//! - Only `ReadingListStore::toggle` and `save` write the reading-list slot.

pub mod kv_store;
pub mod reading_list;
