//! Core use-case services.
//!
//! # Responsibility
//! - Filtering, like counting and view derivation over the catalog.
//! - Stay free of persistence; callers pass reading-list snapshots in.

pub mod filter;
pub mod like_counter;
pub mod render;
