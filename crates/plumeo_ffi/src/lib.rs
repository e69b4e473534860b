//! UI bridge for the Plumeo core.

pub mod api;
